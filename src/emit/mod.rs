//! Builds the named values for every generated file.
//!
//! Nothing in here touches the filesystem: the generator loads arrays,
//! asks these helpers for template values and writes whatever the
//! renderer returns.

pub mod literals;
pub mod names;
pub mod values;

pub use literals::{hex_lines, hex_literal, HEX_LINE_WIDTH};
pub use names::ArtifactNames;
pub use values::{
    aggregate_header_values, aggregate_source_values, fm_source_values, namespace_close,
    namespace_open, ArraySummary, GenerationStamp,
};
