//! Error reporting for tree mutations.
//!
//! Every failure here is recoverable and local: a rejected operation leaves
//! the tree exactly as it was and later calls are unaffected. Queries report
//! absence through `Option` or a `-1` sentinel instead, so a stored key of
//! `0` can never be mistaken for "not found".

use thiserror::Error;

/// The ways a tree mutation can be rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The key being inserted is already in the tree. The tree holds at most
    /// one node per key, so the insert is refused rather than duplicated.
    #[error("key already exists in the tree")]
    DuplicateKey,

    /// No node with the requested key exists in the tree.
    #[error("no node was found with that key")]
    NotFound,

    /// The operation needs at least one node but the tree is empty.
    #[error("tree is empty")]
    EmptyTree,
}

/// Convenience alias for fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
