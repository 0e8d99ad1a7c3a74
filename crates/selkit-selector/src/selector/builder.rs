use selkit_common::warning::warn_once;

use super::{Category, Combinator, SelectorError};

/// An in-progress selector.
///
/// Parts are appended in [`Category`] order; element, ID and pseudo-element
/// parts may be appended once each. Every part method checks before it
/// mutates, so a rejected call leaves the builder unchanged.
///
/// Prefer starting chains from [`crate::facade`], which always hands out a
/// fresh builder.
///
/// # Example
/// ```
/// use selkit_selector::SelectorBuilder;
///
/// let mut builder = SelectorBuilder::new();
/// let selector = builder
///     .id("main")?
///     .class("container")?
///     .class("editable")?
///     .stringify();
/// assert_eq!(selector, "#main.container.editable");
/// # Ok::<(), selkit_selector::SelectorError>(())
/// ```
#[derive(Debug, Default)]
pub struct SelectorBuilder {
    /// Rendered text so far. Drained by [`SelectorBuilder::stringify`].
    buffer: String,
    used_element: bool,
    used_id: bool,
    used_pseudo_element: bool,
    /// Category of the last successful part; `None` is rank 0.
    last: Option<Category>,
}

impl SelectorBuilder {
    /// Create an empty builder at rank 0 with no parts used.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Append a bare element name.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateCategory`] if an element was already added,
    /// [`SelectorError::OrderViolation`] if any other part was already added.
    pub fn element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Element, value)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Append `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateCategory`] if an ID was already added,
    /// [`SelectorError::OrderViolation`] if a class or later part was already added.
    pub fn id(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Id, value)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Append `.value`. May be repeated.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if an attribute or later part was already added.
    pub fn class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Class, value)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Append `[value]`. The bracket contents are not inspected. May be repeated.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-class or pseudo-element was already added.
    pub fn attr(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::Attribute, value)
    }

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Append `:value`. May be repeated.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if a pseudo-element was already added.
    pub fn pseudo_class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::PseudoClass, value)
    }

    /// Append `::value`. Pseudo-elements always come last.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateCategory`] if a pseudo-element was already added.
    pub fn pseudo_element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.append(Category::PseudoElement, value)
    }

    /// Append a part of the given category. The named methods above all
    /// forward here.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateCategory`] is checked first, then
    /// [`SelectorError::OrderViolation`].
    pub fn append(&mut self, category: Category, value: &str) -> Result<&mut Self, SelectorError> {
        if category.is_unique() && self.is_used(category) {
            return Err(SelectorError::DuplicateCategory { category });
        }
        if let Some(after) = self.last.filter(|last| category < *last) {
            return Err(SelectorError::OrderViolation { category, after });
        }

        self.record(category, value);
        Ok(self)
    }

    /// A builder whose first part is `value`. Any single part is valid on a
    /// fresh builder, so no checks run.
    pub(crate) fn starting_with(category: Category, value: &str) -> Self {
        let mut builder = Self::new();
        builder.record(category, value);
        builder
    }

    fn record(&mut self, category: Category, value: &str) {
        self.buffer.push_str(&category.render(value));
        self.last = Some(category);
        match category {
            Category::Element => self.used_element = true,
            Category::Id => self.used_id = true,
            Category::PseudoElement => self.used_pseudo_element = true,
            Category::Class | Category::Attribute | Category::PseudoClass => {}
        }
    }

    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    ///
    /// Append `left`, the combinator surrounded by single spaces, then `right`.
    ///
    /// Only the operands' current text is read; they are not drained and stay
    /// usable. The combined text does not take part in this builder's part
    /// ordering, so this never fails.
    pub fn combine(&mut self, left: &Self, combinator: Combinator, right: &Self) -> &mut Self {
        if left.buffer.is_empty() || right.buffer.is_empty() {
            warn_once(
                "selector",
                "combining an empty selector (was it already stringified?)",
            );
        }

        self.buffer.push_str(&left.buffer);
        self.buffer.push(' ');
        self.buffer.push(combinator.token());
        self.buffer.push(' ');
        self.buffer.push_str(&right.buffer);
        self
    }

    /// Return the selector text and empty the buffer.
    ///
    /// Part bookkeeping is kept, so a drained builder still rejects parts
    /// that would have been rejected before. A second call returns `""`.
    #[must_use]
    pub fn stringify(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    /// The selector text accumulated so far, without draining it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// The category of the last part appended, if any.
    #[must_use]
    pub const fn last_category(&self) -> Option<Category> {
        self.last
    }

    /// Rank of the last part appended; 0 for a builder with no parts.
    #[must_use]
    pub fn rank(&self) -> u8 {
        self.last.map_or(0, Category::rank)
    }

    const fn is_used(&self, category: Category) -> bool {
        match category {
            Category::Element => self.used_element,
            Category::Id => self.used_id,
            Category::PseudoElement => self.used_pseudo_element,
            Category::Class | Category::Attribute | Category::PseudoClass => false,
        }
    }
}
