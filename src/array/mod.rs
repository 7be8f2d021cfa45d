pub mod feature_map;

pub use feature_map::FeatureMap;

use std::fmt;

/// Which side of a test case an array file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FmRole {
    /// Input feature map (`ifm<N>.npy`).
    Ifm,
    /// Expected output feature map (`ofm<N>.npy`).
    Ofm,
}

impl FmRole {
    /// File and symbol prefix for this role.
    pub fn prefix(self) -> &'static str {
        match self {
            FmRole::Ifm => "ifm",
            FmRole::Ofm => "ofm",
        }
    }

    /// Parses a file-name prefix back into a role.
    pub fn from_prefix(prefix: &str) -> Option<FmRole> {
        match prefix {
            "ifm" => Some(FmRole::Ifm),
            "ofm" => Some(FmRole::Ofm),
            _ => None,
        }
    }
}

impl fmt::Display for FmRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Element types that can be embedded. Both are one byte wide, so an
/// array's byte size equals its element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataType {
    #[default]
    Int8,
    Uint8,
}

impl DataType {
    /// The C++ type tag written into generated files.
    pub fn c_type(self) -> &'static str {
        match self {
            DataType::Int8 => "int8_t",
            DataType::Uint8 => "uint8_t",
        }
    }

    pub fn item_size(self) -> usize {
        1
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_type())
    }
}
