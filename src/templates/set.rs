use super::{render_text, TemplateId, TemplateRenderer, TemplateValues};
use crate::error::GenError;
use log::debug;
use std::fs;
use std::path::Path;

const BUILTIN_LICENSE_HEADER: &str = include_str!("../../templates/header_template.txt");
const BUILTIN_FM_SOURCE: &str = include_str!("../../templates/testdata.cc.template");
const BUILTIN_AGGREGATE_HEADER: &str = include_str!("../../templates/TestData.hpp.template");
const BUILTIN_AGGREGATE_SOURCE: &str = include_str!("../../templates/TestData.cc.template");

/// The default [`TemplateRenderer`]: four template texts rendered with
/// [`render_text`].
#[derive(Debug, Clone)]
pub struct TemplateSet {
    license_header: String,
    fm_source: String,
    aggregate_header: String,
    aggregate_source: String,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TemplateSet {
    /// Templates shipped in the crate's `templates/` folder.
    pub fn builtin() -> Self {
        Self {
            license_header: BUILTIN_LICENSE_HEADER.to_string(),
            fm_source: BUILTIN_FM_SOURCE.to_string(),
            aggregate_header: BUILTIN_AGGREGATE_HEADER.to_string(),
            aggregate_source: BUILTIN_AGGREGATE_SOURCE.to_string(),
        }
    }

    /// Builds a set from the built-in templates with optional overrides.
    ///
    /// With `template_dir`, all four templates are read from it by their
    /// [`TemplateId::file_name`]. `license_template` then replaces the
    /// license header; a relative path is looked up inside `template_dir`
    /// when one is given.
    pub fn load(
        template_dir: Option<&Path>,
        license_template: Option<&Path>,
    ) -> Result<Self, GenError> {
        let mut set = Self::builtin();

        if let Some(dir) = template_dir {
            for id in TemplateId::ALL {
                let text = read_template(&dir.join(id.file_name()))?;
                set.replace(id, text);
            }
        }

        if let Some(path) = license_template {
            let path = match template_dir {
                Some(dir) if path.is_relative() => dir.join(path),
                _ => path.to_path_buf(),
            };
            set.replace(TemplateId::LicenseHeader, read_template(&path)?);
        }

        Ok(set)
    }

    pub fn source(&self, id: TemplateId) -> &str {
        match id {
            TemplateId::LicenseHeader => &self.license_header,
            TemplateId::FmSource => &self.fm_source,
            TemplateId::AggregateHeader => &self.aggregate_header,
            TemplateId::AggregateSource => &self.aggregate_source,
        }
    }

    pub fn replace(&mut self, id: TemplateId, text: String) {
        let slot = match id {
            TemplateId::LicenseHeader => &mut self.license_header,
            TemplateId::FmSource => &mut self.fm_source,
            TemplateId::AggregateHeader => &mut self.aggregate_header,
            TemplateId::AggregateSource => &mut self.aggregate_source,
        };
        *slot = text;
    }
}

impl TemplateRenderer for TemplateSet {
    fn render(&self, template: TemplateId, values: &TemplateValues) -> Result<String, GenError> {
        render_text(template.file_name(), self.source(template), values)
    }
}

fn read_template(path: &Path) -> Result<String, GenError> {
    debug!("loading template {}", path.display());
    fs::read_to_string(path).map_err(|source| GenError::TemplateNotFound {
        path: path.to_path_buf(),
        source,
    })
}
