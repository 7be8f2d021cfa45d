use crate::array::{DataType, FmRole};
use ndarray_npy::ReadNpyError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a generation run can fail.
/// None of these are recovered: the run stops at the first one and any
/// files already written stay on disk.
#[derive(Debug, Error)]
pub enum GenError {
    // Data folder layout
    #[error("failed to read data folder {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unexpected array file {}; expected ifm<N>.npy or ofm<N>.npy", .path.display())]
    UnexpectedArrayFile { path: PathBuf },
    #[error("{} and {} hold the same array", .first.display(), .second.display())]
    DuplicateArrayFile { first: PathBuf, second: PathBuf },
    #[error("missing {role}{index}.npy in {}", .dir.display())]
    MissingPairFile {
        dir: PathBuf,
        role: FmRole,
        index: usize,
    },

    // Array contents
    #[error("failed to load {}: {source}", .path.display())]
    LoadArray {
        path: PathBuf,
        #[source]
        source: ReadNpyError,
    },
    #[error("{} has an unsupported element type; only int8 and uint8 arrays can be embedded", .path.display())]
    UnsupportedDtype {
        path: PathBuf,
        #[source]
        source: ReadNpyError,
    },
    #[error("{} holds no elements", .path.display())]
    EmptyArray { path: PathBuf },
    #[error("{} holds {found} data but {expected} was inferred from ifm0.npy", .path.display())]
    DtypeMismatch {
        path: PathBuf,
        expected: DataType,
        found: DataType,
    },
    #[error("{role} size changed for index {index}: expected {expected} bytes, found {found}")]
    SizeMismatch {
        role: FmRole,
        index: usize,
        expected: usize,
        found: usize,
    },

    // Templates
    #[error("template {} not found: {source}", .path.display())]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("template {template} references unknown value `{name}`")]
    MissingTemplateValue { template: String, name: String },

    // Output
    #[error("failed to create output folder {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
