//! Stack of open directory names
//!
//! The stack length always equals the depth of the directory that is
//! currently open: an empty stack is the tree root (`./`).

use tracing::{debug, instrument};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathStack {
    stack: Vec<String>,
}

impl PathStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the next directory. No validation is applied.
    pub fn push(&mut self, directory_name: impl Into<String>) {
        self.stack.push(directory_name.into());
    }

    /// All open directories joined by `/`, with a trailing `/`.
    /// Empty at the root.
    pub fn current_prefix(&self) -> String {
        if self.stack.is_empty() {
            return String::new();
        }
        let mut prefix = self.stack.join("/");
        prefix.push('/');
        prefix
    }

    /// Pop directories until the stack is `depth` entries long.
    ///
    /// Returns `false`, leaving the stack untouched, when `depth` is deeper
    /// than the current depth.
    #[instrument(level = "trace", skip(self))]
    pub fn truncate_to_depth(&mut self, depth: usize) -> bool {
        let current = self.depth();
        if current == depth {
            return true;
        }
        if current < depth {
            return false;
        }
        debug!("closing {} directories", current - depth);
        self.stack.truncate(depth);
        true
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
