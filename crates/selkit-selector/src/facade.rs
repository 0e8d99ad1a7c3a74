//! Entry points for building selectors.
//!
//! Each function starts from a fresh [`SelectorBuilder`] (rank 0, no parts
//! used) and applies a single operation to it. A fresh builder accepts any
//! first part, so these never fail; further parts are chained on the
//! returned builder.
//!
//! ```
//! use selkit_selector::{Combinator, facade};
//!
//! # fn main() -> Result<(), selkit_selector::SelectorError> {
//! let list = facade::element("ul");
//! let item = facade::element("li").class("active")?.stringify();
//! assert_eq!(item, "li.active");
//!
//! let nav = facade::id("nav");
//! let selector = facade::combine(&nav, Combinator::Child, &list).stringify();
//! assert_eq!(selector, "#nav > ul");
//! # Ok(())
//! # }
//! ```

use crate::selector::{Category, Combinator, SelectorBuilder};

/// Start a selector with a type selector, e.g. `div`.
#[must_use]
pub fn element(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Element, value)
}

/// Start a selector with an ID selector, e.g. `#main`.
#[must_use]
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Id, value)
}

/// Start a selector with a class selector, e.g. `.container`.
#[must_use]
pub fn class(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Class, value)
}

/// Start a selector with an attribute selector, e.g. `[type="text"]`.
#[must_use]
pub fn attr(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::Attribute, value)
}

/// Start a selector with a pseudo-class, e.g. `:hover`.
#[must_use]
pub fn pseudo_class(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::PseudoClass, value)
}

/// Start a selector with a pseudo-element, e.g. `::before`.
#[must_use]
pub fn pseudo_element(value: &str) -> SelectorBuilder {
    SelectorBuilder::starting_with(Category::PseudoElement, value)
}

/// Start a selector by joining two existing selectors with a combinator.
///
/// The operands are only read; both remain usable afterwards.
#[must_use]
pub fn combine(left: &SelectorBuilder, combinator: Combinator, right: &SelectorBuilder) -> SelectorBuilder {
    let mut builder = SelectorBuilder::new();
    let _ = builder.combine(left, combinator, right);
    builder
}
