//! Path assembler: turns tree nodes into file path strings

use std::path::MAIN_SEPARATOR;

use tracing::{debug, instrument, trace};

use super::reader::TreeReader;
use crate::domain::{slash_char, DomainError, DomainResult, PathStack, TreeNode};

/// Iterator producing one path per file node, in source order.
///
/// Directories only open scope and never appear in the output. A node may be
/// at most as deep as the currently open directory stack; errors are yielded
/// once, after which the assembler is exhausted.
#[derive(Debug)]
pub struct PathAssembler<I> {
    nodes: I,
    stack: PathStack,
    failed: bool,
}

impl<I> PathAssembler<I>
where
    I: Iterator<Item = DomainResult<TreeNode>>,
{
    pub fn new(nodes: I) -> Self {
        Self {
            nodes,
            stack: PathStack::new(),
            failed: false,
        }
    }

    /// Update the stack for one node, returning its path if it is a file.
    fn process(&mut self, node: TreeNode) -> DomainResult<Option<String>> {
        let current = self.stack.depth();
        if node.depth > current {
            return Err(DomainError::DepthJump {
                delta: node.depth - current,
                line: node.line_number,
            });
        }
        if node.depth < current {
            self.stack.truncate_to_depth(node.depth);
        }
        if node.is_directory {
            trace!("open directory {} at depth {}", node.name, node.depth);
            self.stack.push(node.name);
            Ok(None)
        } else {
            Ok(Some(self.stack.current_prefix() + &node.name))
        }
    }
}

impl<I> Iterator for PathAssembler<I>
where
    I: Iterator<Item = DomainResult<TreeNode>>,
{
    type Item = DomainResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while let Some(node) = self.nodes.next() {
            match node.and_then(|node| self.process(node)) {
                Ok(Some(path)) => return Some(Ok(path)),
                Ok(None) => continue,
                Err(e) => {
                    debug!("stopping path assembly: {}", e);
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl<I> std::iter::FusedIterator for PathAssembler<I> where
    I: Iterator<Item = DomainResult<TreeNode>>
{
}

/// A parent path normalized to one separator character, ending with exactly
/// one trailing separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentPrefix {
    prefix: String,
}

impl ParentPrefix {
    /// Normalize `parent` to use `separator`.
    ///
    /// Fails when the parent path mixes `/` and `\`.
    pub fn new(parent: &str, separator: char) -> DomainResult<Self> {
        let slash = slash_char(parent)
            .map_err(|_| DomainError::MixedParentSeparators(parent.to_string()))?;
        let mut prefix = match slash {
            Some(slash) if slash != separator => parent.replace(slash, &separator.to_string()),
            _ => parent.to_string(),
        };
        let kept = prefix.trim_end_matches(separator).len();
        prefix.truncate(kept);
        prefix.push(separator);
        Ok(Self { prefix })
    }

    /// Normalize `parent` for the platform path separator.
    pub fn for_platform(parent: &str) -> DomainResult<Self> {
        Self::new(parent, MAIN_SEPARATOR)
    }

    pub fn as_str(&self) -> &str {
        &self.prefix
    }

    /// Prepend the prefix to a path.
    pub fn apply(&self, path: &str) -> String {
        let mut result = String::with_capacity(self.prefix.len() + path.len());
        result.push_str(&self.prefix);
        result.push_str(path);
        result
    }
}

/// The file paths of a TreeScript, optionally prefixed with a parent path.
#[derive(Debug)]
pub struct TreeFiles<'a> {
    paths: PathAssembler<TreeReader<'a>>,
    parent: Option<ParentPrefix>,
}

impl Iterator for TreeFiles<'_> {
    type Item = DomainResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        Some(path.map(|path| match &self.parent {
            Some(parent) => parent.apply(&path),
            None => path,
        }))
    }
}

impl std::iter::FusedIterator for TreeFiles<'_> {}

/// Generate the file paths of a TreeScript.
///
/// The parent path, if any, is normalized to the platform separator before
/// any path is produced.
pub fn generate_files<'a>(tree_text: &'a str, parent_path: Option<&str>) -> DomainResult<TreeFiles<'a>> {
    generate_files_with_separator(tree_text, parent_path, MAIN_SEPARATOR)
}

/// Like [`generate_files`], normalizing the parent path to `separator`.
#[instrument(level = "debug", skip(tree_text))]
pub fn generate_files_with_separator<'a>(
    tree_text: &'a str,
    parent_path: Option<&str>,
    separator: char,
) -> DomainResult<TreeFiles<'a>> {
    let parent = parent_path
        .map(|parent| ParentPrefix::new(parent, separator))
        .transpose()?;
    Ok(TreeFiles {
        paths: PathAssembler::new(TreeReader::new(tree_text)),
        parent,
    })
}
