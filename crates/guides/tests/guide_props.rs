#![cfg(test)]
#![allow(clippy::unwrap_used, reason = "tests")]

use guides::prelude::*;
use guides::{ResolvedGuide, StyleValue};

#[test]
fn props_resolve_into_canonical_values() {
    let _ = env_logger::builder().is_test(true).try_init();
    let props = GuideProps::from_json(
        r#"{
            "padding": [8, 16],
            "block": { "start": 24 },
            "className": "  debug-frame ",
            "style": { "paddingLeft": "1rem", "outlineColor": "magenta" }
        }"#,
    )
    .unwrap();
    let ResolvedGuide {
        edges,
        class_name,
        style,
    } = props.resolve("guide-padding");

    assert_eq!(
        edges,
        Edges {
            top: 24.0,
            right: 16.0,
            bottom: 8.0,
            left: 16.0
        }
    );
    assert_eq!(class_name, "guide-padding debug-frame");
    assert_eq!(
        style.to_inline(),
        "padding-top: 24px; padding-right: 16px; padding-bottom: 8px; padding-left: 1rem; outline-color: magenta;"
    );
}

#[test]
fn empty_props_resolve_to_defaults() {
    let resolved = GuideProps::default().resolve("guide");
    assert_eq!(resolved.edges, Edges::default());
    assert_eq!(resolved.class_name, "guide");
    assert_eq!(resolved.style, padding_style(&Edges::default()));
}

#[test]
fn props_with_bad_padding_shape_are_rejected() {
    assert!(matches!(
        GuideProps::from_json(r#"{ "padding": [1, 2, 3] }"#),
        Err(GuideError::InvalidArgument(_))
    ));
}

#[test]
fn grid_offset_fills_to_next_line() {
    let style = grid_offset_style(14, 8.0).unwrap();
    assert_eq!(style.get("marginBottom"), Some(&StyleValue::Number(2.0)));
    let on_grid = grid_offset_style("32px", 8.0).unwrap();
    assert_eq!(on_grid.to_inline(), "margin-bottom: 0px;");
    assert!(matches!(
        grid_offset_style(14, 0.0),
        Err(GuideError::InvalidArgument(_))
    ));
}

#[test]
fn facade_exposes_core_operations() {
    assert_eq!(format_value(16), "16px");
    assert_eq!(format_value("auto"), "auto");
    assert_eq!(moduloize(14, 8.0).unwrap(), "6px");
    assert_eq!(cx!("a", false, "b"), "a b");
    let merged = cs!(
        StyleMap::new().set("color", "red"),
        StyleMap::new().set("margin", 8)
    );
    assert_eq!(merged, StyleMap::new().set("color", "red").set("margin", 8));
    assert_eq!(
        parse_padding(&PaddingConfig::new().with_padding(10)),
        Edges::uniform(10.0)
    );
}

#[test]
fn resolved_guide_serializes_for_collaborators() {
    let resolved = GuideProps::from_json(r#"{ "padding": 4 }"#)
        .unwrap()
        .resolve("guide");
    let json = serde_json::to_value(&resolved).unwrap();
    assert_eq!(json["className"], "guide");
    assert_eq!(json["edges"]["left"], 4.0);
    assert_eq!(json["style"]["paddingTop"], 4.0);
}

#[test]
fn falsy_class_and_null_styles_in_props() {
    let resolved = GuideProps::from_json(
        r#"{ "padding": 2, "className": false, "style": { "paddingTop": null, "color": "teal" } }"#,
    )
    .unwrap()
    .resolve("guide");
    assert_eq!(resolved.class_name, "guide");
    assert_eq!(
        resolved.style.to_inline(),
        "padding-top: 2px; padding-right: 2px; padding-bottom: 2px; padding-left: 2px; color: teal;"
    );
}
