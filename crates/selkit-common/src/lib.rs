//! Common utilities for selkit.
//!
//! This crate provides shared infrastructure used by the selector builder and the CLI:
//! - **Warning System** - colored terminal output for suspicious-but-legal usage
//! - **JSON** - generic serialize/deserialize helpers over `serde_json`
//! - **Geometry** - the `Rectangle` value object

pub mod geometry;
pub mod json;
pub mod warning;

pub use geometry::Rectangle;
pub use json::{JsonError, deserialize, serialize};
