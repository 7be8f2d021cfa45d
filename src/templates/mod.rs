pub mod engine;
pub mod set;
pub mod values;

pub use engine::render_text;
pub use set::TemplateSet;
pub use values::TemplateValues;

use crate::error::GenError;
use std::fmt;

/// The four templates a generation run renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// License and "autogenerated" comment block placed at the top of every file.
    LicenseHeader,
    /// One `.cc` file per array.
    FmSource,
    /// The shared `TestData*.hpp`.
    AggregateHeader,
    /// The shared `TestData*.cc` with the lookup tables.
    AggregateSource,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::LicenseHeader,
        TemplateId::FmSource,
        TemplateId::AggregateHeader,
        TemplateId::AggregateSource,
    ];

    /// File name of the template inside a template directory.
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateId::LicenseHeader => "header_template.txt",
            TemplateId::FmSource => "testdata.cc.template",
            TemplateId::AggregateHeader => "TestData.hpp.template",
            TemplateId::AggregateSource => "TestData.cc.template",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Turns a template plus named values into text.
/// The generator only talks to this trait, so the templating mechanism can
/// be swapped without touching the pipeline.
pub trait TemplateRenderer {
    fn render(&self, template: TemplateId, values: &TemplateValues) -> Result<String, GenError>;
}

#[cfg(test)]
mod tests;
