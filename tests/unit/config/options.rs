use super::*;

#[test]
fn defaults_validate() {
    GridOptions::default().validate().unwrap();
}

#[test]
fn absent_keys_keep_defaults() {
    let opts = GridOptions::from_json(r#"{ "prefix": "dbg", "rows": 12 }"#).unwrap();
    assert_eq!(opts.prefix, "dbg");
    assert_eq!(opts.rows, 12);
    assert_eq!(opts.rem, 16.0);
    assert_eq!(opts.breakpoints.len(), 3);
    assert_eq!(opts.key_bindings, vec![KeyBinding::default()]);
}

#[test]
fn partial_settings_override_one_bag_only() {
    let opts =
        GridOptions::from_json(r#"{ "settings": { "rows": { "color": "red" } } }"#).unwrap();
    assert_eq!(opts.settings.rows.get("color").map(String::as_str), Some("red"));
    assert_eq!(opts.settings.label_font_size(), DEFAULT_LABEL_FONT_SIZE);
    assert_eq!(opts.settings.columns, StyleSettings::default().columns);
}

#[test]
fn dash_cased_and_legacy_keys_are_accepted() {
    let opts = GridOptions::from_json(
        r#"{
            "default-unit": "px",
            "breakpoints": {
                "narrow": { "breakpoint": 30, "columns": 4, "row-height": 1.5 }
            },
            "key-bindings": [ { "key-code": 71, "ctrl": true, "layers": "columns" } ]
        }"#,
    )
    .unwrap();
    assert_eq!(opts.default_unit, "px");
    let narrow = &opts.breakpoints["narrow"];
    assert_eq!(narrow.threshold, 30.0);
    assert_eq!(narrow.row_height, 1.5);
    assert_eq!(narrow.gutter, DimensionInput::Number(0.0));
    assert_eq!(opts.key_bindings[0], KeyBinding::ctrl(71, LayerSet::Columns));
}

#[test]
fn label_font_size_reads_either_spelling() {
    let mut settings = StyleSettings::default();
    settings.rows.remove("fontSize");
    settings
        .rows
        .insert("font-size".to_string(), "10px".to_string());
    assert_eq!(settings.label_font_size(), "10px");
}

#[test]
fn layer_sets_cover_expected_layers() {
    assert!(LayerSet::All.includes_columns() && LayerSet::All.includes_rows());
    assert!(LayerSet::Columns.includes_columns() && !LayerSet::Columns.includes_rows());
    assert!(!LayerSet::Rows.includes_columns() && LayerSet::Rows.includes_rows());
}

#[test]
fn validate_rejects_empty_breakpoints() {
    let opts = GridOptions::default().with_breakpoints(Vec::<(String, BreakpointSpec)>::new());
    assert!(matches!(opts.validate(), Err(GridishError::Validation(_))));
}

#[test]
fn validate_rejects_bad_prefix() {
    for prefix in ["", "1grid", "grid overlay", "a.b"] {
        let opts = GridOptions {
            prefix: prefix.to_string(),
            ..GridOptions::default()
        };
        assert!(opts.validate().is_err(), "prefix {prefix:?} accepted");
    }
}

#[test]
fn validate_rejects_non_positive_numbers() {
    let opts = GridOptions {
        rem: 0.0,
        ..GridOptions::default()
    };
    assert!(opts.validate().is_err());

    let opts = GridOptions {
        rows: 0,
        ..GridOptions::default()
    };
    assert!(opts.validate().is_err());

    let opts = GridOptions::default()
        .with_breakpoints([("flat", BreakpointSpec::new(10.0, 2, 0.0, 0.0, 0.0))]);
    assert!(opts.validate().is_err());
}

#[test]
fn validate_rejects_malformed_gutter() {
    let opts = GridOptions::default()
        .with_breakpoints([("s", BreakpointSpec::new(10.0, 2, "wide", 0.0, 1.0))]);
    let err = opts.validate().unwrap_err();
    assert!(err.to_string().contains("gutter"));
}

#[test]
fn validate_rejects_shrinking_columns() {
    let opts = GridOptions::default().with_breakpoints([
        ("small", BreakpointSpec::new(10.0, 12, 0.0, 0.0, 1.0)),
        ("large", BreakpointSpec::new(90.0, 4, 0.0, 0.0, 1.0)),
    ]);
    let err = opts.validate().unwrap_err();
    assert!(err.to_string().contains("large"));
}

#[test]
fn validate_rejects_zero_key_code() {
    let opts = GridOptions {
        key_bindings: vec![KeyBinding::ctrl(0, LayerSet::All)],
        ..GridOptions::default()
    };
    assert!(opts.validate().is_err());
}
