use crate::array::FmRole;

/// Derives every generated symbol and file name from the use-case string.
/// An empty use-case adds nothing; otherwise `_<usecase>` is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactNames {
    suffix: String,
}

impl ArtifactNames {
    /// Base name of the aggregate header and source.
    pub const BASE_NAME: &'static str = "TestData";

    pub fn new(usecase: &str) -> Self {
        let suffix = if usecase.is_empty() {
            String::new()
        } else {
            format!("_{}", usecase)
        };
        Self { suffix }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// C++ symbol of one array, e.g. `ifm0_kws`.
    pub fn array_name(&self, role: FmRole, index: usize) -> String {
        format!("{}{}{}", role.prefix(), index, self.suffix)
    }

    pub fn array_source_file(&self, role: FmRole, index: usize) -> String {
        format!("{}.cc", self.array_name(role, index))
    }

    pub fn header_file(&self) -> String {
        format!("{}{}.hpp", Self::BASE_NAME, self.suffix)
    }

    pub fn aggregate_source_file(&self) -> String {
        format!("{}{}.cc", Self::BASE_NAME, self.suffix)
    }

    /// Include guard for the aggregate header, e.g. `TESTDATA_KWS_HPP`.
    pub fn include_guard(&self) -> String {
        self.header_file()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}
