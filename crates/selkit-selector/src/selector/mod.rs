//! CSS selector assembly
//!
//! This module builds selector text per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/) ordering rules.
//! It never parses or matches selectors; it only concatenates parts and
//! rejects chains that would put them out of order.

mod builder;
mod category;
mod combinator;
mod error;

pub use builder::SelectorBuilder;
pub use category::Category;
pub use combinator::Combinator;
pub use error::SelectorError;
