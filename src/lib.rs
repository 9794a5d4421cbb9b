//! treescript-files: list the file paths described by a TreeScript.
//!
//! A TreeScript is an indented outline of directories and files, two
//! whitespace characters per level. Directory lines carry one slash at
//! either end; everything else is a file, optionally followed by a data
//! label.
//!
//! ```text
//! src/
//!   main.rs
//!   data/
//!     input.csv Label
//! README.md
//! ```
//!
//! yields `src/main.rs`, `src/data/input.csv` and `README.md`.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{generate_files, ts_files, ApplicationError, InputData};
pub use domain::{DomainError, TreeNode};
