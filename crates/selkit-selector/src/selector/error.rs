use thiserror::Error;

use super::Category;

/// Errors raised by [`SelectorBuilder`](super::SelectorBuilder) part methods.
///
/// Both are detected before the builder is touched, so the builder is left
/// exactly as it was before the failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A type, ID or pseudo-element part was added twice to the same selector.
    #[error("duplicate {category} part")]
    DuplicateCategory {
        /// The category that was repeated.
        category: Category,
    },

    /// A part was added after a part that must follow it,
    /// e.g. an ID after a class.
    #[error("{category} part cannot follow {after} part")]
    OrderViolation {
        /// The category that was rejected.
        category: Category,
        /// The most recently added category.
        after: Category,
    },
}
