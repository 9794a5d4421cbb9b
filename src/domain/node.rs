//! Tree nodes and the line tokenizer

use tracing::{instrument, trace, warn};

use super::error::{DomainError, DomainResult};
use super::validation::{classify_token, is_valid_data_label};

/// Leading whitespace characters per depth level.
pub const INDENT_WIDTH: usize = 2;

/// One parsed TreeScript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// 1-based source line, for diagnostics
    pub line_number: usize,
    /// Nesting level
    pub depth: usize,
    pub is_directory: bool,
    /// Validated name with slash characters removed
    pub name: String,
    /// Optional trailing word; informational only
    pub data_label: Option<String>,
}

impl TreeNode {
    pub fn file(line_number: usize, depth: usize, name: impl Into<String>) -> Self {
        Self {
            line_number,
            depth,
            is_directory: false,
            name: name.into(),
            data_label: None,
        }
    }

    pub fn directory(line_number: usize, depth: usize, name: impl Into<String>) -> Self {
        Self {
            is_directory: true,
            ..Self::file(line_number, depth, name)
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.data_label = Some(label.into());
        self
    }
}

/// Depth of a line, or `None` when the leading whitespace is not a whole
/// number of indent units.
pub fn calculate_depth(line: &str) -> Option<usize> {
    let count = line.chars().take_while(|c| c.is_whitespace()).count();
    (count % INDENT_WIDTH == 0).then_some(count / INDENT_WIDTH)
}

/// Tokenize one raw line into a [`TreeNode`].
#[instrument(level = "trace")]
pub fn tokenize_line(line_number: usize, line: &str) -> DomainResult<TreeNode> {
    let depth = calculate_depth(line).ok_or(DomainError::InvalidIndentation { line: line_number })?;

    let trimmed = line.trim();
    let (token, data_label) = match trimmed.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.split_whitespace().next()),
        None => (trimmed, None),
    };

    let (is_directory, name) = classify_token(token).map_err(|source| DomainError::InvalidNode {
        line: line_number,
        source,
    })?;

    if let Some(label) = data_label {
        if !is_valid_data_label(label) {
            warn!("line {}: unusual data label {:?}", line_number, label);
        }
    }
    trace!(depth, is_directory, node = name, "tokenized line {}", line_number);

    Ok(TreeNode {
        line_number,
        depth,
        is_directory,
        name: name.to_string(),
        data_label: data_label.map(str::to_string),
    })
}
