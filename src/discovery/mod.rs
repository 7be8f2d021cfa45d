pub mod scanner;

pub use scanner::{discover, parse_array_file_name, Discovery, FmPair};

#[cfg(test)]
mod tests;
