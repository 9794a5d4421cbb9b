//! Application layer: tree reading, path assembly and program input
//!
//! This layer drives the domain types over whole TreeScript documents.

pub mod assembler;
pub mod error;
pub mod error_ext;
pub mod input;
pub mod reader;

pub use assembler::{
    generate_files, generate_files_with_separator, ParentPrefix, PathAssembler, TreeFiles,
};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use input::{read_tree_file, ts_files, InputData, DEFAULT_SEPARATOR, FILE_SIZE_LIMIT};
pub use reader::{read_input_tree, TreeReader};
