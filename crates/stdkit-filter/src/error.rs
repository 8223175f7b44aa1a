//! Error types for the filter crate.

use thiserror::Error;

/// Errors that can occur when editing a [`Chain`](crate::Chain) by reference.
///
/// Building trees through [`Filterable`](crate::Filterable) and comparing them
/// with `same_as` never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// No child of the chain is `same_as` the given reference rule.
    #[error("reference rule not found in {chain} chain")]
    ReferenceNotFound { chain: &'static str },
}

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, FilterError>;
