//! Plain rectangle value object.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described only by its size.
///
/// The area is always computed, never stored, so it is not part of the
/// serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
