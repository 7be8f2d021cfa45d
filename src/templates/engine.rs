// Minimal `{{ name }}` substitution.
//
// A line holding nothing but one placeholder is treated as a block: each
// line of the value gets the placeholder's indentation, and the whole line
// disappears when the value is empty. Any other placeholder is replaced
// inline.

use super::TemplateValues;
use crate::error::GenError;
use regex::Regex;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("valid pattern")
    })
}

fn block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\s*)\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}\s*$").expect("valid pattern")
    })
}

/// Renders `template` with `values`. `name` is only used in error messages.
/// Output always ends with a newline.
pub fn render_text(name: &str, template: &str, values: &TemplateValues) -> Result<String, GenError> {
    let lookup = |key: &str| {
        values.get(key).ok_or_else(|| GenError::MissingTemplateValue {
            template: name.to_string(),
            name: key.to_string(),
        })
    };

    let mut out = String::with_capacity(template.len());
    for line in template.lines() {
        if let Some(caps) = block_pattern().captures(line) {
            let indent = &caps[1];
            let value = lookup(&caps[2])?;
            for value_line in value.lines() {
                if !value_line.is_empty() {
                    out.push_str(indent);
                    out.push_str(value_line);
                }
                out.push('\n');
            }
            continue;
        }

        let mut last = 0;
        for caps in placeholder_pattern().captures_iter(line) {
            let Some(whole) = caps.get(0) else { continue };
            out.push_str(&line[last..whole.start()]);
            out.push_str(lookup(&caps[1])?);
            last = whole.end();
        }
        out.push_str(&line[last..]);
        out.push('\n');
    }

    Ok(out)
}
