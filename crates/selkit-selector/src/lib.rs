//! Fluent CSS selector assembly for selkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Part ordering (`div#id.class[attr]:pseudo::element`)
//!   - Uniqueness of the type, ID and pseudo-element parts
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling and subsequent-sibling
//!
//! # Not Implemented
//!
//! - Selector parsing
//! - Validation of identifiers, attribute or pseudo-class syntax
//! - Matching against a document tree
//!
//! # Example
//!
//! ```
//! use selkit_selector::facade;
//!
//! # fn main() -> Result<(), selkit_selector::SelectorError> {
//! let selector = facade::element("a")
//!     .attr(r#"href$=".png""#)?
//!     .pseudo_class("focus")?
//!     .stringify();
//! assert_eq!(selector, r#"a[href$=".png"]:focus"#);
//! # Ok(())
//! # }
//! ```

/// Stateless entry points that start every chain from a fresh builder.
pub mod facade;
/// Selector parts, combinators and the builder per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

pub use selector::{Category, Combinator, SelectorBuilder, SelectorError};
