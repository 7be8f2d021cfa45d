use super::{hex_lines, ArtifactNames};
use crate::array::DataType;
use crate::templates::TemplateValues;
use chrono::{Datelike, NaiveDateTime};

/// Tool name and timestamp stamped into every generated comment block.
/// Captured once per run so all files of one run agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStamp {
    pub tool_name: &'static str,
    pub gen_time: NaiveDateTime,
}

impl GenerationStamp {
    pub fn new(tool_name: &'static str, gen_time: NaiveDateTime) -> Self {
        Self {
            tool_name,
            gen_time,
        }
    }

    /// Values for the license header template. `file_name` names the array
    /// file a per-array source was generated from.
    pub fn license_values(&self, file_name: Option<&str>) -> TemplateValues {
        let file_note = match file_name {
            Some(name) => format!(" and {} file", name),
            None => String::new(),
        };
        TemplateValues::new()
            .with("tool_name", self.tool_name)
            .with("gen_time", self.gen_time.format("%Y-%m-%d %H:%M:%S"))
            .with("year", self.gen_time.year())
            .with("file_note", file_note)
    }
}

/// What the aggregate files need to know once every pair is processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArraySummary {
    pub data_type: DataType,
    pub ifm_names: Vec<String>,
    /// Common byte size of all inputs, 0 when there are none.
    pub ifm_size: usize,
    pub ofm_names: Vec<String>,
    /// Common byte size of all outputs, 0 when there are none.
    pub ofm_size: usize,
}

impl ArraySummary {
    pub fn fm_count(&self) -> usize {
        self.ifm_names.len()
    }
}

/// `namespace a {` lines, outermost first.
pub fn namespace_open(namespaces: &[String]) -> String {
    namespaces
        .iter()
        .map(|ns| format!("namespace {} {{", ns))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Closing lines for [`namespace_open`], innermost first.
pub fn namespace_close(namespaces: &[String]) -> String {
    namespaces
        .iter()
        .rev()
        .map(|ns| format!("}} /* namespace {} */", ns))
        .collect::<Vec<_>>()
        .join("\n")
}

fn with_namespaces(values: TemplateValues, namespaces: &[String]) -> TemplateValues {
    values
        .with("namespace_open", namespace_open(namespaces))
        .with("namespace_close", namespace_close(namespaces))
}

pub fn fm_source_values(
    license_header: &str,
    names: &ArtifactNames,
    var_name: &str,
    data_type: DataType,
    data: &[u8],
    namespaces: &[String],
) -> TemplateValues {
    let values = TemplateValues::new()
        .with("common_template_header", license_header)
        .with("include_h", names.header_file())
        .with("var_name", var_name)
        .with("data_type", data_type.c_type())
        .with("fm_data", hex_lines(data).join(",\n"));
    with_namespaces(values, namespaces)
}

pub fn aggregate_header_values(
    license_header: &str,
    names: &ArtifactNames,
    summary: &ArraySummary,
    namespaces: &[String],
) -> TemplateValues {
    let c_type = summary.data_type.c_type();
    let declarations = |array_names: &[String], size_macro: &str| {
        array_names
            .iter()
            .map(|name| format!("extern const {} {}[{}];", c_type, name, size_macro))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let values = TemplateValues::new()
        .with("common_template_header", license_header)
        .with("include_guard", names.include_guard())
        .with("fm_count", summary.fm_count())
        .with("ifm_var_size", summary.ifm_size)
        .with("ofm_var_size", summary.ofm_size)
        .with("ifm_declarations", declarations(&summary.ifm_names, "IFM_DATA_SIZE"))
        .with("ofm_declarations", declarations(&summary.ofm_names, "OFM_DATA_SIZE"))
        .with("data_type", c_type);
    with_namespaces(values, namespaces)
}

pub fn aggregate_source_values(
    license_header: &str,
    names: &ArtifactNames,
    summary: &ArraySummary,
    namespaces: &[String],
) -> TemplateValues {
    // A C++ array initializer cannot be empty.
    let entries = |array_names: &[String]| {
        if array_names.is_empty() {
            "nullptr".to_string()
        } else {
            array_names.join(",\n")
        }
    };

    let values = TemplateValues::new()
        .with("common_template_header", license_header)
        .with("include_h", names.header_file())
        .with("ifm_array_entries", entries(&summary.ifm_names))
        .with("ofm_array_entries", entries(&summary.ofm_names))
        .with("data_type", summary.data_type.c_type());
    with_namespaces(values, namespaces)
}
