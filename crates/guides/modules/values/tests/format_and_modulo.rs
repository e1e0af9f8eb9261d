#![cfg(test)]
#![allow(clippy::unwrap_used, reason = "tests")]

use guides_values::{CssLength, GridUnit, GuideError, format_value, moduloize};

#[test]
fn numbers_gain_pixel_suffix() {
    assert_eq!(format_value(16), "16px");
    assert_eq!(format_value(0.5f64), "0.5px");
    assert_eq!(format_value(-4), "-4px");
}

#[test]
fn tokens_pass_through_unchanged() {
    assert_eq!(format_value("1fr"), "1fr");
    assert_eq!(format_value("auto"), "auto");
    assert_eq!(format_value(String::from("calc(100% - 8px)")), "calc(100% - 8px)");
}

#[test]
fn missing_value_formats_as_zero() {
    assert_eq!(format_value(CssLength::Unset), "0px");
    assert_eq!(format_value(None::<f64>), "0px");
    assert_eq!(format_value(Some(12)), "12px");
}

#[test]
fn modulo_keeps_sign_of_input() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert_eq!(moduloize(14, 8.0).unwrap(), "6px");
    assert_eq!(moduloize(-2, 8.0).unwrap(), "-2px");
    assert_eq!(moduloize(-10, 8.0).unwrap(), "-2px");
    assert_eq!(moduloize(16, 8.0).unwrap(), "0px");
    assert_eq!(moduloize(-16, 8.0).unwrap(), "0px");
}

#[test]
fn modulo_reads_numeric_strings() {
    assert_eq!(moduloize("14", 8.0).unwrap(), "6px");
    assert_eq!(moduloize("21px", 4.0).unwrap(), "1px");
}

#[test]
fn modulo_of_missing_value_is_zero() {
    assert_eq!(moduloize(CssLength::Unset, 8.0).unwrap(), "0px");
    assert_eq!(moduloize(None::<i32>, 8.0).unwrap(), "0px");
}

#[test]
fn modulo_matches_formatter_on_remainder() {
    for value in [-17, -8, -1, 0, 3, 8, 9, 31] {
        let expected = format_value(GridUnit::new(8.0).unwrap().remainder(f64::from(value)));
        assert_eq!(moduloize(value, 8.0).unwrap(), expected, "value {value}");
    }
}

#[test]
fn non_positive_unit_is_rejected() {
    let _ = env_logger::builder().is_test(true).try_init();
    for unit in [0.0, -8.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            moduloize(14, unit),
            Err(GuideError::InvalidArgument(_))
        ));
    }
}

#[test]
fn keyword_cannot_be_moduloized() {
    assert!(matches!(
        moduloize("auto", 8.0),
        Err(GuideError::InvalidArgument(_))
    ));
}

#[test]
fn grid_trim_and_fill() {
    let grid = GridUnit::new(8.0).unwrap();
    assert_eq!(grid.trim(14.0), 8.0);
    assert_eq!(grid.fill(14.0), 2.0);
    assert_eq!(grid.trim(-2.0), 0.0);
    assert_eq!(grid.fill(-2.0), -6.0);
    assert_eq!(grid.fill(24.0), 0.0);
}

#[test]
fn lengths_deserialize_from_loose_json() {
    let values: Vec<CssLength> = serde_json::from_str(r#"[16, "auto", null]"#).unwrap();
    assert_eq!(
        values,
        vec![
            CssLength::Pixels(16.0),
            CssLength::Token("auto".to_owned()),
            CssLength::Unset,
        ]
    );
}

#[test]
fn grid_unit_deserialization_validates() {
    let unit: GridUnit = serde_json::from_str("8").unwrap();
    assert_eq!(unit.get(), 8.0);
    let rejected = serde_json::from_str::<GridUnit>("0");
    assert!(matches!(rejected, Err(err) if err.to_string().contains("positive")));
}

#[test]
fn large_and_fine_grained_numbers_keep_precision() {
    assert_eq!(format_value(1234.5678), "1234.5678px");
    assert_eq!(format_value(16_777_217), "16777217px");
    assert_eq!(format_value("16777217"), "16777217");
    assert_eq!(moduloize(16_777_217, 8.0).unwrap(), "1px");
    assert_eq!(moduloize("16777217px", 8.0).unwrap(), "1px");
    assert_eq!(
        moduloize(1234.5678, 1000.0).unwrap(),
        format!("{}px", 1234.5678f64 % 1000.0)
    );
}
