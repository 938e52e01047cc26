use super::*;

#[test]
fn parses_value_and_unit() {
    assert_eq!(
        parse_unit("25px", "rem").unwrap(),
        ParsedDimension::new(25.0, "px")
    );
}

#[test]
fn missing_unit_uses_default() {
    assert_eq!(
        parse_unit("30", "rem").unwrap(),
        ParsedDimension::new(30.0, "rem")
    );
    assert_eq!(parse_unit("30", "em").unwrap().unit, "em");
}

#[test]
fn fractional_values_keep_their_unit() {
    assert_eq!(
        parse_unit("1.25rem", "px").unwrap(),
        ParsedDimension::new(1.25, "rem")
    );
}

#[test]
fn scans_to_the_first_digit_run() {
    let d = parse_unit("  12vw trailing", "rem").unwrap();
    assert_eq!(d, ParsedDimension::new(12.0, "vw"));
}

#[test]
fn dot_without_fraction_is_not_part_of_the_number() {
    assert_eq!(
        parse_unit("3.", "rem").unwrap(),
        ParsedDimension::new(3.0, "rem")
    );
}

#[test]
fn rejects_input_without_digits() {
    let err = parse_unit("px", "rem").unwrap_err();
    assert!(matches!(err, GridishError::Validation(_)));
    assert!(parse_unit("", "rem").is_err());
}

#[test]
fn numeric_inputs_use_default_unit() {
    assert_eq!(
        DimensionInput::Number(0.0).parse("rem").unwrap(),
        ParsedDimension::rem(0.0)
    );
    assert_eq!(
        DimensionInput::Number(2.5).parse("px").unwrap(),
        ParsedDimension::px(2.5)
    );
    assert!(DimensionInput::Number(-1.0).parse("px").is_err());
}

#[test]
fn untagged_json_accepts_numbers_and_strings() {
    let n: DimensionInput = serde_json::from_str("0").unwrap();
    let s: DimensionInput = serde_json::from_str("\"25px\"").unwrap();
    assert_eq!(n, DimensionInput::Number(0.0));
    assert_eq!(s, DimensionInput::from("25px"));
}

#[test]
fn display_uses_shortest_float_form() {
    assert_eq!(ParsedDimension::px(30.0).half().to_string(), "15px");
    assert_eq!(ParsedDimension::px(25.0).half().to_string(), "12.5px");
    assert_eq!(ParsedDimension::rem(0.0).to_string(), "0rem");
}
