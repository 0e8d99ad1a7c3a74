//! Integration tests for the `facade` entry points.

use selkit_selector::{Category, Combinator, SelectorError, facade};

#[test]
fn test_id_with_classes() {
    let selector = facade::id("main")
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap()
        .stringify();
    assert_eq!(selector, "#main.container.editable");
}

#[test]
fn test_element_attribute_pseudo_class() {
    let selector = facade::element("a")
        .attr(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .stringify();
    assert_eq!(selector, r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_each_entry_point_starts_fresh() {
    let cases = [
        (facade::element("div"), "div", Category::Element),
        (facade::id("main"), "#main", Category::Id),
        (facade::class("btn"), ".btn", Category::Class),
        (facade::attr("disabled"), "[disabled]", Category::Attribute),
        (facade::pseudo_class("hover"), ":hover", Category::PseudoClass),
        (facade::pseudo_element("after"), "::after", Category::PseudoElement),
    ];
    for (builder, expected, category) in cases {
        assert_eq!(builder.as_str(), expected);
        assert_eq!(builder.last_category(), Some(category));
    }
}

#[test]
fn test_separate_chains_do_not_share_state() {
    let mut first = facade::element("a");
    let mut second = facade::element("b");
    assert!(first.class("x").is_ok());
    assert_eq!(second.stringify(), "b");
    assert_eq!(first.stringify(), "a.x");
}

#[test]
fn test_element_twice_raises_duplicate() {
    let mut builder = facade::element("a");
    assert_eq!(
        builder.element("span").unwrap_err(),
        SelectorError::DuplicateCategory {
            category: Category::Element
        }
    );
}

#[test]
fn test_id_after_class_raises_order_violation() {
    let mut builder = facade::class("container");
    assert_eq!(
        builder.id("main").unwrap_err(),
        SelectorError::OrderViolation {
            category: Category::Id,
            after: Category::Class,
        }
    );
}

#[test]
fn test_error_propagates_with_question_mark() {
    fn build() -> Result<String, SelectorError> {
        Ok(facade::pseudo_class("hover").class("late")?.stringify())
    }
    assert!(matches!(
        build(),
        Err(SelectorError::OrderViolation {
            category: Category::Class,
            after: Category::PseudoClass,
        })
    ));
}

#[test]
fn test_combine_reads_operands_at_call_time() {
    let mut a = facade::element("h2");
    let mut b = facade::class("lead");

    let mut combined = facade::combine(&a, Combinator::NextSibling, &b);
    assert!(a.class("late").is_ok());

    assert_eq!(combined.stringify(), "h2 + .lead");
    assert_eq!(a.stringify(), "h2.late");
    assert_eq!(b.stringify(), ".lead");
}

#[test]
fn test_combine_is_not_ranked() {
    let x = facade::element("div");
    let y = facade::element("p");
    let mut combined = facade::combine(&x, Combinator::Child, &y);
    assert_eq!(combined.rank(), 0);
    assert!(combined.id("late").is_ok());
    assert_eq!(combined.stringify(), "div > p#late");
}

#[test]
fn test_nested_combine_flattens_left_to_right() {
    let x = facade::element("h1");
    let y = facade::class("subtitle");
    let z = facade::element("p");

    let inner = facade::combine(&x, Combinator::SubsequentSibling, &y);
    let selector = facade::combine(&inner, Combinator::NextSibling, &z).stringify();
    assert_eq!(selector, "h1 ~ .subtitle + p");
}

#[test]
fn test_combine_on_temporary() {
    let x = facade::id("nav");
    let y = facade::element("ul");
    let z = facade::element("li");
    let selector = facade::combine(
        &facade::combine(&x, Combinator::Child, &y),
        Combinator::Descendant,
        &z,
    )
    .stringify();
    assert_eq!(selector, "#nav > ul   li");
}

#[test]
fn test_stringify_twice_from_facade() {
    let mut builder = facade::pseudo_element("selection");
    assert_eq!(builder.stringify(), "::selection");
    assert_eq!(builder.stringify(), "");
}

#[test]
fn test_fresh_builder_keeps_first_part_bookkeeping() {
    // The first part is recorded like any other: unique and ranked.
    let mut builder = facade::id("main");
    assert_eq!(builder.rank(), 2);
    assert_eq!(
        builder.id("other").unwrap_err(),
        SelectorError::DuplicateCategory {
            category: Category::Id
        }
    );
    assert_eq!(
        builder.element("div").unwrap_err(),
        SelectorError::OrderViolation {
            category: Category::Element,
            after: Category::Id,
        }
    );
    assert_eq!(builder.stringify(), "#main");
}
