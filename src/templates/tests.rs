#[cfg(test)]
mod template_tests {
    use crate::error::GenError;
    use crate::templates::{render_text, TemplateId, TemplateRenderer, TemplateSet, TemplateValues};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_inline_placeholders() {
        let values = TemplateValues::new()
            .with("data_type", "int8_t")
            .with("var_name", "ifm0");
        let out = render_text("t", "const {{data_type}} {{ var_name }}[];", &values).unwrap();
        assert_eq!(out, "const int8_t ifm0[];\n");
    }

    #[test]
    fn test_block_placeholder_is_indented() {
        let values = TemplateValues::new().with("body", "0x1, 0x2,\n0x3");
        let out = render_text("t", "{\n    {{ body }}\n};", &values).unwrap();
        assert_eq!(out, "{\n    0x1, 0x2,\n    0x3\n};\n");
    }

    #[test]
    fn test_empty_block_placeholder_drops_the_line() {
        let values = TemplateValues::new().with("namespace_open", "");
        let out = render_text("t", "a\n{{ namespace_open }}\nb\n", &values).unwrap();
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn test_block_keeps_blank_lines_unindented() {
        let values = TemplateValues::new().with("hdr", "/*\n\n */");
        let out = render_text("t", "  {{hdr}}", &values).unwrap();
        assert_eq!(out, "  /*\n\n   */\n");
    }

    #[test]
    fn test_unknown_placeholder_is_an_error() {
        let err = render_text("testdata.cc.template", "{{ missing }}", &TemplateValues::new())
            .unwrap_err();
        match err {
            GenError::MissingTemplateValue { template, name } => {
                assert_eq!(template, "testdata.cc.template");
                assert_eq!(name, "missing");
            }
            other => panic!("expected MissingTemplateValue, got {:?}", other),
        }
    }

    #[test]
    fn test_text_without_placeholders_passes_through() {
        let out = render_text("t", "#include <cstdint>\n{ not a placeholder }", &TemplateValues::new())
            .unwrap();
        assert_eq!(out, "#include <cstdint>\n{ not a placeholder }\n");
    }

    #[test]
    fn test_builtin_set_renders_license_header() {
        let values = TemplateValues::new()
            .with("tool_name", "gen-test-data")
            .with("gen_time", "2024-01-02 03:04:05")
            .with("year", 2024)
            .with("file_note", " and ifm0.npy file");
        let out = TemplateSet::builtin()
            .render(TemplateId::LicenseHeader, &values)
            .unwrap();
        assert!(out.contains("Copyright 2024"));
        assert!(out.contains("Generated from gen-test-data tool and ifm0.npy file."));
        assert!(out.contains("Date: 2024-01-02 03:04:05"));
    }

    #[test]
    fn test_load_license_override() {
        let dir = TempDir::new().unwrap();
        let license = dir.path().join("license.txt");
        fs::write(&license, "// (c) {{ year }} {{ tool_name }}\n").unwrap();

        let set = TemplateSet::load(None, Some(&license)).unwrap();
        let values = TemplateValues::new().with("year", 2030).with("tool_name", "gen");
        let out = set.render(TemplateId::LicenseHeader, &values).unwrap();
        assert_eq!(out, "// (c) 2030 gen\n");
        assert_eq!(
            set.source(TemplateId::FmSource),
            TemplateSet::builtin().source(TemplateId::FmSource)
        );
    }

    #[test]
    fn test_load_template_dir() {
        let dir = TempDir::new().unwrap();
        for id in TemplateId::ALL {
            fs::write(dir.path().join(id.file_name()), format!("{}\n", id)).unwrap();
        }
        fs::write(dir.path().join("short.txt"), "short\n").unwrap();

        let set = TemplateSet::load(Some(dir.path()), Some(std::path::Path::new("short.txt")))
            .unwrap();
        assert_eq!(set.source(TemplateId::AggregateHeader), "TestData.hpp.template\n");
        assert_eq!(set.source(TemplateId::LicenseHeader), "short\n");
    }

    #[test]
    fn test_missing_template_file() {
        let dir = TempDir::new().unwrap();
        let err = TemplateSet::load(Some(dir.path()), None).unwrap_err();
        assert!(matches!(err, GenError::TemplateNotFound { .. }));
    }
}
