//! Error handling and result types for tree operations.
//!
//! Every structural operation either completes in full or fails with exactly
//! one of the variants below, leaving the tree untouched.

use crate::types::NodeId;
use thiserror::Error;

/// Error type for tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The handle does not denote a live node of this tree instance.
    #[error("invalid handle {0}")]
    InvalidHandle(NodeId),
    /// Insertion or substitution would put two equal keys under one parent.
    #[error("duplicate key among the children of {parent}")]
    DuplicateKey {
        /// The node whose children would have collided. When the collision
        /// is found while copying from another tree, this is the node of the
        /// source tree whose children collide under the destination policy.
        parent: NodeId,
    },
    /// A lookup completed without a match.
    #[error("value not found in tree")]
    NotFound,
    /// The operation needs a root and the tree has none.
    #[error("tree has no root")]
    EmptyTree,
    /// A sibling range was malformed.
    #[error("invalid sibling range: {0}")]
    InvalidRange(String),
    /// Internal structure integrity violation.
    #[error("corrupted tree: {0}")]
    CorruptedTree(String),
}

impl TreeError {
    /// Create an InvalidRange error with context
    pub fn invalid_range(operation: &str, details: &str) -> Self {
        Self::InvalidRange(format!("{}: {}", operation, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is a handle error
    pub fn is_invalid_handle(&self) -> bool {
        matches!(self, Self::InvalidHandle(_))
    }

    /// Check if this error is a uniqueness violation
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// `NotFound` is a negative answer, not a failure to perform the operation.
    pub fn is_negative_answer(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Internal result type for tree operations
pub(crate) type InternalResult<T> = Result<T, TreeError>;

/// Public result type for tree operations that may fail
pub type TreeResult<T> = Result<T, TreeError>;

/// Result type for lookup operations
pub type FindResult<T> = Result<T, TreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, TreeError>;

/// Result extension trait for improved error handling
pub trait TreeResultExt<T> {
    /// Attach context to the message-carrying variants.
    fn with_context(self, context: &str) -> TreeResult<T>;

    /// Attach the name of the failing operation.
    fn with_operation(self, operation: &str) -> TreeResult<T>;

    /// Log error and continue with default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> TreeResultExt<T> for Result<T, TreeError> {
    fn with_context(self, context: &str) -> TreeResult<T> {
        self.map_err(|e| match e {
            TreeError::InvalidRange(msg) => TreeError::invalid_range(context, &msg),
            TreeError::CorruptedTree(msg) => {
                TreeError::CorruptedTree(format!("{}: {}", context, msg))
            }
            other => other,
        })
    }

    fn with_operation(self, operation: &str) -> TreeResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::warn!("tree operation failed, using default: {}", e);
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_only_touches_message_variants() {
        let err: TreeResult<()> = Err(TreeError::invalid_range("sort", "reversed bounds"));
        let err = err.with_operation("sort_by").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid sibling range: Operation 'sort_by': sort: reversed bounds"
        );

        let not_found: TreeResult<()> = Err(TreeError::NotFound);
        assert_eq!(not_found.with_context("find"), Err(TreeError::NotFound));
    }

    #[test]
    fn test_or_default_with_log() {
        let failed: TreeResult<usize> = Err(TreeError::EmptyTree);
        assert_eq!(failed.or_default_with_log(), 0);
        assert_eq!(Ok::<usize, TreeError>(7).or_default_with_log(), 7);
    }

    #[test]
    fn test_classification() {
        assert!(TreeError::NotFound.is_negative_answer());
        assert!(!TreeError::EmptyTree.is_negative_answer());
        assert!(TreeError::corrupted_tree("links", "cycle").to_string().contains("links corruption"));
    }
}
