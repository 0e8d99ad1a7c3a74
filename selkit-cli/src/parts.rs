//! Turning command-line tokens into a selector.
//!
//! Tokens are either parts (`class=btn`) or combinators (`>`, `+`, `~`, and
//! `_` for descendant). Consecutive parts form one compound selector; the
//! compounds are joined left to right.

use anyhow::{Context, Result, bail};
use selkit_selector::{Category, Combinator, SelectorBuilder, facade};

/// A single command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<category>=<value>`
    Part(Category, String),
    /// A combinator between two compounds.
    Combinator(Combinator),
}

/// Classify one argument.
///
/// # Errors
///
/// Fails when the argument is neither a combinator nor `<category>=<value>`
/// with a known category.
pub fn parse_token(arg: &str) -> Result<Token> {
    if arg == "_" {
        return Ok(Token::Combinator(Combinator::Descendant));
    }
    if let Ok(combinator) = arg.parse::<Combinator>() {
        return Ok(Token::Combinator(combinator));
    }

    let Some((name, value)) = arg.split_once('=') else {
        bail!("expected <category>=<value> or a combinator, got '{arg}'");
    };
    let category = name
        .parse::<Category>()
        .with_context(|| format!("unknown selector part '{name}'"))?;
    Ok(Token::Part(category, value.to_string()))
}

fn start_compound(category: Category, value: &str) -> SelectorBuilder {
    match category {
        Category::Element => facade::element(value),
        Category::Id => facade::id(value),
        Category::Class => facade::class(value),
        Category::Attribute => facade::attr(value),
        Category::PseudoClass => facade::pseudo_class(value),
        Category::PseudoElement => facade::pseudo_element(value),
    }
}

/// Assemble the selector text described by `args`.
///
/// # Errors
///
/// Fails on an unknown token, on a combinator with no compound on either
/// side, and on any part that breaks selector ordering or uniqueness.
pub fn build(args: &[String]) -> Result<String> {
    let mut result: Option<SelectorBuilder> = None;
    let mut current: Option<SelectorBuilder> = None;
    let mut pending: Option<Combinator> = None;

    for arg in args {
        match parse_token(arg)? {
            Token::Part(category, value) => {
                if let Some(builder) = current.as_mut() {
                    let _ = builder
                        .append(category, &value)
                        .with_context(|| format!("cannot add '{arg}'"))?;
                } else {
                    current = Some(start_compound(category, &value));
                }
            }
            Token::Combinator(combinator) => {
                let Some(compound) = current.take() else {
                    bail!("combinator '{arg}' must follow a selector part");
                };
                result = Some(join(result, pending, compound));
                pending = Some(combinator);
            }
        }
    }

    let Some(compound) = current else {
        if pending.is_some() {
            bail!("selector cannot end with a combinator");
        }
        bail!("no selector parts given");
    };
    Ok(join(result, pending, compound).stringify())
}

fn join(
    left: Option<SelectorBuilder>,
    combinator: Option<Combinator>,
    right: SelectorBuilder,
) -> SelectorBuilder {
    match (left, combinator) {
        (Some(left), Some(combinator)) => facade::combine(&left, combinator, &right),
        _ => right,
    }
}
