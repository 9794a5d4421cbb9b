//! Program input: tree file reading and argument validation

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use super::assembler::generate_files;
use super::error::{ApplicationError, ApplicationResult};
use super::error_ext::IoResultExt;
use crate::domain::MAX_NAME_LENGTH;

/// Default limit on the size of a tree file.
pub const FILE_SIZE_LIMIT: u64 = 8 * 1024 * 1024;

/// Default separator between output paths.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Validated program input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputData {
    /// TreeScript text
    pub tree_input: String,
    /// Prefix for every output path
    pub parent_path: Option<String>,
    /// Placed between output paths
    pub separator: String,
}

impl InputData {
    /// Build input data, validating the parent path.
    ///
    /// A blank parent path is treated as absent; one of 100 characters or
    /// more is rejected.
    pub fn new(
        tree_input: impl Into<String>,
        parent_path: Option<&str>,
        separator: impl Into<String>,
    ) -> ApplicationResult<Self> {
        let parent_path = match parent_path {
            Some(parent) => {
                let length = parent.chars().count();
                if length >= MAX_NAME_LENGTH {
                    return Err(ApplicationError::ParentPathTooLong(length));
                }
                Some(parent).filter(|p| !p.trim().is_empty()).map(str::to_string)
            }
            None => None,
        };
        Ok(Self {
            tree_input: tree_input.into(),
            parent_path,
            separator: separator.into(),
        })
    }
}

/// Read a tree file, enforcing the input rules.
///
/// The file must exist, must not be a symlink, must be at most `size_limit`
/// bytes and must contain something other than whitespace.
#[instrument(level = "debug")]
pub fn read_tree_file(path: &Path, size_limit: u64) -> ApplicationResult<String> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ApplicationError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e).with_path_context("read metadata", path),
    };
    if metadata.file_type().is_symlink() {
        return Err(ApplicationError::SymlinkDisabled(path.to_path_buf()));
    }
    if metadata.len() > size_limit {
        return Err(ApplicationError::FileTooLarge {
            path: path.to_path_buf(),
            limit: size_limit,
        });
    }
    let data = fs::read_to_string(path).with_path_context("read tree file", path)?;
    if data.trim().is_empty() {
        return Err(ApplicationError::EmptyInput(path.to_path_buf()));
    }
    debug!("read {} bytes", data.len());
    Ok(data)
}

/// Convert the input tree into the joined file list.
///
/// All paths are produced before anything is returned; the first error
/// aborts the conversion.
pub fn ts_files(input: &InputData) -> ApplicationResult<String> {
    let paths = generate_files(&input.tree_input, input.parent_path.as_deref())?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(paths.join(&input.separator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use tempfile::TempDir;

    #[test]
    fn test_blank_parent_path_is_dropped() {
        let input = InputData::new("a.txt", Some("   "), "\n").unwrap();
        assert_eq!(input.parent_path, None);
    }

    #[test]
    fn test_long_parent_path_is_rejected() {
        let parent = "p".repeat(100);
        assert!(matches!(
            InputData::new("a.txt", Some(&parent), "\n"),
            Err(ApplicationError::ParentPathTooLong(100))
        ));
    }

    #[test]
    fn test_ts_files_joins_with_separator() {
        let input = InputData::new("src/\n  a.rs\n  b.rs", None, ",").unwrap();
        assert_eq!(ts_files(&input).unwrap(), "src/a.rs,src/b.rs");
    }

    #[test]
    fn test_ts_files_reports_domain_error() {
        let input = InputData::new("src/\n file.py", None, "\n").unwrap();
        let err = ts_files(&input).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::InvalidIndentation { line: 2 })
        ));
    }

    #[test]
    fn test_read_tree_file_missing() {
        let dir = TempDir::new().unwrap();
        let result = read_tree_file(&dir.path().join("missing.tree"), FILE_SIZE_LIMIT);
        assert!(matches!(result, Err(ApplicationError::FileNotFound(_))));
    }

    #[test]
    fn test_read_tree_file_blank() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blank.tree");
        fs::write(&path, "  \n\n").unwrap();
        assert!(matches!(
            read_tree_file(&path, FILE_SIZE_LIMIT),
            Err(ApplicationError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_read_tree_file_too_large() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.tree");
        fs::write(&path, "file.txt\n".repeat(4)).unwrap();
        assert!(matches!(
            read_tree_file(&path, 8),
            Err(ApplicationError::FileTooLarge { limit: 8, .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_tree_file_symlink() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("real.tree");
        fs::write(&target, "file.txt").unwrap();
        let link = dir.path().join("link.tree");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert!(matches!(
            read_tree_file(&link, FILE_SIZE_LIMIT),
            Err(ApplicationError::SymlinkDisabled(_))
        ));
    }

    #[test]
    fn test_read_tree_file_ok() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ok.tree");
        fs::write(&path, "src/\n  main.rs\n").unwrap();
        assert_eq!(read_tree_file(&path, FILE_SIZE_LIMIT).unwrap(), "src/\n  main.rs\n");
    }
}
