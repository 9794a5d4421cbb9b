//! Tree stream reader: lazy sequence of tokenized nodes

use std::iter::Enumerate;
use std::str::Split;

use tracing::debug;

use crate::domain::{tokenize_line, DomainResult, TreeNode};

/// Iterator over the nodes of a TreeScript text.
///
/// Blank lines and `#` comment lines are skipped. The first tokenizer error
/// is yielded once, after which the reader is exhausted.
#[derive(Debug)]
pub struct TreeReader<'a> {
    lines: Enumerate<Split<'a, char>>,
    failed: bool,
}

impl<'a> TreeReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.split('\n').enumerate(),
            failed: false,
        }
    }
}

/// Whether a line carries no node.
fn is_skipped(line: &str) -> bool {
    let stripped = line.trim_start();
    stripped.is_empty() || stripped.starts_with('#')
}

impl Iterator for TreeReader<'_> {
    type Item = DomainResult<TreeNode>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for (index, line) in self.lines.by_ref() {
            if is_skipped(line) {
                continue;
            }
            let result = tokenize_line(index + 1, line);
            if let Err(e) = &result {
                debug!("stopping tree read: {}", e);
                self.failed = true;
            }
            return Some(result);
        }
        None
    }
}

impl std::iter::FusedIterator for TreeReader<'_> {}

/// Read all nodes of a TreeScript text.
pub fn read_input_tree(input: &str) -> TreeReader<'_> {
    TreeReader::new(input)
}
