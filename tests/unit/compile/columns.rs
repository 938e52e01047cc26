use super::*;
use crate::foundation::units::ParsedDimension;

fn tier(name: &str, threshold: f64, columns: u32) -> ResolvedBreakpoint {
    ResolvedBreakpoint {
        name: name.to_string(),
        threshold,
        columns,
        gutter: ParsedDimension::px(30.0),
        margin: ParsedDimension::rem(1.0),
        row_height: 2.0,
    }
}

#[test]
fn column_total_equals_widest_tier() {
    let sorted = vec![
        tier("small", 47.0, 2),
        tier("medium", 64.0, 12),
        tier("large", 90.0, 12),
    ];
    let layer = compile_columns(&GridClasses::new("grid"), &sorted).unwrap();
    assert_eq!(layer.elements.len(), 12);
    assert_eq!(layer.count_for("small"), 2);
    assert_eq!(layer.count_for("medium"), 10);
    assert_eq!(layer.count_for("large"), 0);
}

#[test]
fn one_media_rule_per_tier_in_ascending_order() {
    let sorted = vec![tier("small", 47.0, 2), tier("large", 90.0, 12)];
    let layer = compile_columns(&GridClasses::new("grid"), &sorted).unwrap();
    let queries: Vec<String> = layer
        .media_rules
        .iter()
        .map(|m| m.query.to_string())
        .collect();
    assert_eq!(queries, vec!["(min-width: 0rem)", "(min-width: 90rem)"]);
}

#[test]
fn media_rule_sets_spacing_and_reveals_own_tier() {
    let sorted = vec![tier("small", 47.0, 2)];
    let layer = compile_columns(&GridClasses::new("dbg"), &sorted).unwrap();
    let rules = &layer.media_rules[0].rules;

    assert_eq!(rules[0].selector, ".dbg__columns");
    assert_eq!(rules[0].value_of("padding"), Some("0 1rem"));
    assert_eq!(rules[1].selector, ".dbg__columns__item");
    assert_eq!(rules[1].value_of("margin"), Some("0 15px"));
    assert_eq!(rules[2].selector, ".dbg__columns__item.\\--small");
    assert_eq!(rules[2].value_of("display"), Some("initial"));
}

#[test]
fn shrinking_tier_is_rejected() {
    let sorted = vec![tier("small", 47.0, 6), tier("large", 90.0, 4)];
    let err = compile_columns(&GridClasses::new("grid"), &sorted).unwrap_err();
    assert!(matches!(err, GridishError::Validation(_)));
}

#[test]
fn empty_input_yields_empty_layer() {
    let layer = compile_columns(&GridClasses::new("grid"), &[]).unwrap();
    assert!(layer.elements.is_empty() && layer.media_rules.is_empty());
}

#[test]
fn base_rules_hide_items_after_decoration() {
    let mut bag = StyleBag::new();
    bag.insert("display".to_string(), "block".to_string());
    bag.insert("backgroundColor".to_string(), "pink".to_string());
    let rules = column_base_rules(&GridClasses::new("grid"), &bag);

    assert_eq!(rules[0].value_of("display"), Some("flex"));
    assert_eq!(rules[1].value_of("background-color"), Some("pink"));
    assert_eq!(rules[1].value_of("display"), Some("none"));
}
