//! Tests for the Compatibility Resolver
//!
//! These tests verify:
//! - Fail-open behaviour with no rules loaded
//! - Fallback to an option's own series list
//! - AND semantics within and across rules
//! - Rule precedence over the series list
//! - Grouping of compatible options for display

mod common;

use buildsheet::catalog::{CompatibilityRule, OptionId, Vehicle};
use buildsheet::logic::compatibility::{compatible_options, group_by_category, is_compatible};
use common::*;

fn unrelated_rule() -> CompatibilityRule {
    series_rule("unrelated", &["X999"])
}

// =============================================================================
// Fallback Path
// =============================================================================

#[test]
fn test_no_rules_is_fail_open() {
    let option = for_series(option("a"), &["E450"]);
    let v = vehicle("v", "E350", 138, "RWD");
    assert!(is_compatible(&option, &v, &[]));
}

#[test]
fn test_series_list_applies_without_matching_rule() {
    let option = for_series(option("a"), &["E450"]);
    let rules = [unrelated_rule()];
    assert!(!is_compatible(&option, &vehicle("v", "E350", 138, "RWD"), &rules));
    assert!(is_compatible(&option, &vehicle("v", "E450", 158, "RWD"), &rules));
}

#[test]
fn test_empty_series_list_is_unrestricted() {
    let rules = [unrelated_rule()];
    assert!(is_compatible(&option("a"), &vehicle("v", "E350", 138, "RWD"), &rules));
}

// =============================================================================
// Rule Path
// =============================================================================

#[test]
fn test_rule_constrains_every_dimension() {
    let rule = CompatibilityRule {
        option_id: OptionId::from("a"),
        compatible_series_codes: vec!["E350".to_string()],
        compatible_wheelbases: vec![158],
        compatible_drivetrains: vec!["RWD".to_string()],
    };
    let rules = [rule];
    let option = option("a");
    assert!(is_compatible(&option, &vehicle("v", "E350", 158, "RWD"), &rules));
    assert!(!is_compatible(&option, &vehicle("v", "E450", 158, "RWD"), &rules));
    assert!(!is_compatible(&option, &vehicle("v", "E350", 138, "RWD"), &rules));
    assert!(!is_compatible(&option, &vehicle("v", "E350", 158, "AWD"), &rules));
}

#[test]
fn test_empty_rule_lists_do_not_constrain() {
    let rule = CompatibilityRule {
        option_id: OptionId::from("a"),
        compatible_wheelbases: vec![176],
        ..Default::default()
    };
    let rules = [rule];
    assert!(is_compatible(&option("a"), &vehicle("v", "ANY", 176, "4WD"), &rules));
    assert!(!is_compatible(&option("a"), &vehicle("v", "ANY", 158, "4WD"), &rules));
}

#[test]
fn test_all_rules_for_an_option_must_pass() {
    let rules = [
        series_rule("a", &["E350", "E450"]),
        CompatibilityRule {
            option_id: OptionId::from("a"),
            compatible_drivetrains: vec!["RWD".to_string()],
            ..Default::default()
        },
    ];
    assert!(is_compatible(&option("a"), &vehicle("v", "E450", 158, "RWD"), &rules));
    assert!(!is_compatible(&option("a"), &vehicle("v", "E450", 158, "AWD"), &rules));
}

#[test]
fn test_rules_take_precedence_over_series_list() {
    // The option claims E450 only, but its rule allows E350
    let option = for_series(option("a"), &["E450"]);
    let rules = [series_rule("a", &["E350"])];
    assert!(is_compatible(&option, &vehicle("v", "E350", 138, "RWD"), &rules));
    assert!(!is_compatible(&option, &vehicle("v", "E450", 158, "RWD"), &rules));
}

// =============================================================================
// Filtering and Grouping
// =============================================================================

#[test]
fn test_compatible_options_keeps_catalog_order() {
    let catalog = sample_catalog();
    let e350 = &catalog.vehicles[0];
    let e450 = &catalog.vehicles[1];

    let ids = |v: &Vehicle| -> Vec<String> {
        compatible_options(&catalog.options, v, &catalog.compatibility_rules)
            .into_iter()
            .map(|o| o.id.to_string())
            .collect()
    };
    assert_eq!(ids(e350), vec!["a", "b"]);
    assert_eq!(ids(e450), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_group_by_category_first_appearance_order() {
    let catalog = sample_catalog();
    let e450 = &catalog.vehicles[1];
    let compatible = compatible_options(&catalog.options, e450, &catalog.compatibility_rules);
    let groups = group_by_category(&compatible, &catalog.option_categories);

    let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Powertrain", "Interior"]);
    let powertrain: Vec<_> = groups[0].options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(powertrain, vec!["a", "c"]);
}

#[test]
fn test_unknown_category_groups_under_other() {
    let stray = in_category(option("z"), "99");
    let loose = option("y");
    let options = [&stray, &loose];
    let groups = group_by_category(&options, &[category("1", "Powertrain", 1)]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, "Other");
    assert_eq!(groups[0].options.len(), 2);
}
