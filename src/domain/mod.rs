//! Domain layer: TreeScript syntax and path reconstruction
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod node;
pub mod path_stack;
pub mod validation;

pub use error::{DomainError, DomainResult, NameError};
pub use node::{calculate_depth, tokenize_line, TreeNode, INDENT_WIDTH};
pub use path_stack::PathStack;
pub use validation::{classify_token, is_valid_data_label, is_valid_name, slash_char, MAX_NAME_LENGTH};
