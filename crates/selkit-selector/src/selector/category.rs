use strum_macros::{Display, EnumIter, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "If it contains a type selector or universal selector, that type selector
/// or universal selector must come first in the sequence."
///
/// The kinds of simple selector a compound may contain, declared in the order
/// they must appear. The derived `Ord` follows that order, so comparing two
/// categories compares their ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Rendered bare: `div`, `a`, `*`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Rendered with a hash: `#main`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Rendered with a full stop: `.container`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Rendered in square brackets: `[href$=".png"]`
    #[strum(to_string = "attr", serialize = "attribute")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Rendered with a single colon: `:focus`
    PseudoClass,

    /// [CSS Pseudo-Elements Level 4](https://www.w3.org/TR/css-pseudo-4/)
    ///
    /// Rendered with a double colon: `::before`
    PseudoElement,
}

impl Category {
    /// Position of this category within a compound selector, from 1 (element)
    /// to 6 (pseudo-element). A fresh builder sits at rank 0.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Element => 1,
            Self::Id => 2,
            Self::Class => 3,
            Self::Attribute => 4,
            Self::PseudoClass => 5,
            Self::PseudoElement => 6,
        }
    }

    /// Whether the category may appear at most once per selector.
    ///
    /// Classes, attributes and pseudo-classes repeat freely.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Render `value` with this category's prefix. The value is used verbatim.
    #[must_use]
    pub fn render(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }
}
