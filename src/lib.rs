// Test data generator library
// Exports every stage of the generation pipeline for testing and reuse.

pub mod array;
pub mod cli;
pub mod discovery;
pub mod emit;
pub mod error;
pub mod generator;
pub mod templates;

// Re-export commonly used types
pub use array::{DataType, FeatureMap, FmRole};
pub use discovery::{discover, Discovery, FmPair};
pub use error::GenError;
pub use generator::{generate, generate_with, GenerateOptions, GenerateReport};
pub use templates::{TemplateId, TemplateRenderer, TemplateSet, TemplateValues};
