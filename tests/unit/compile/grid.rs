use super::*;
use crate::config::options::BreakpointSpec;

#[test]
fn default_grid_compiles_both_layers() {
    let grid = compile_grid(&GridOptions::default(), 960.0).unwrap();
    assert_eq!(grid.breakpoints.len(), 3);
    assert_eq!(grid.columns.elements.len(), 12);
    assert_eq!(grid.rows.elements.len(), 30);
    assert_eq!(grid.root_rule.selector, ".grid");
    assert_eq!(grid.root_rule.value_of("font-size"), Some("16px"));
    assert_eq!(grid.root_rule.value_of("max-width"), Some("90rem"));
}

#[test]
fn stylesheet_emits_columns_before_rows() {
    let grid = compile_grid(&GridOptions::default(), 960.0).unwrap();
    let css = grid.stylesheet().to_string();

    let root = css.find(".grid {").unwrap();
    let column_media = css.find(".grid__columns__item.\\--small").unwrap();
    let row_base = css.find(".grid__row__item {").unwrap();
    let row_media = css.find(".grid__row__item.\\--large").unwrap();
    assert!(root < column_media && column_media < row_base && row_base < row_media);
    assert!(css.contains("background-color: rgba(0,206,209, .2);"));
    assert!(css.contains("margin: 0 12.5px;"));
}

#[test]
fn stylesheet_media_count_matches_layers() {
    let grid = compile_grid(&GridOptions::default(), 960.0).unwrap();
    assert_eq!(
        grid.stylesheet().media_rules().count(),
        grid.columns.media_rules.len() + grid.rows.media_rules.len()
    );
}

#[test]
fn invalid_options_are_rejected_before_compiling() {
    let opts = GridOptions {
        rows: 0,
        ..GridOptions::default()
    };
    assert!(compile_grid(&opts, 960.0).is_err());
    assert!(compile_grid(&GridOptions::default(), f64::NAN).is_err());
}

#[test]
fn custom_prefix_flows_into_every_selector() {
    let opts = GridOptions {
        prefix: "dbg".to_string(),
        ..GridOptions::default()
    }
    .with_breakpoints([("only", BreakpointSpec::new(40.0, 4, "20px", "1", 1.0))]);
    let css = compile_grid(&opts, 160.0).unwrap().stylesheet().to_string();
    assert!(!css.contains(".grid"));
    assert!(css.contains(".dbg__columns {"));
    assert!(css.contains("padding: 0 1rem;"));
    assert!(css.contains("@media (max-width: 40rem)"));
}
