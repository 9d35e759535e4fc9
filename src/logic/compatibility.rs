//! Compatibility Resolver
//!
//! Decides whether an option may be fitted to a vehicle.
//!
//! # Resolution Rules
//!
//! | Situation                                | Outcome |
//! |------------------------------------------|---------|
//! | No rules loaded at all                   | compatible |
//! | No rule for this option, series list set | vehicle series must be listed |
//! | No rule for this option, no series list  | compatible |
//! | One or more rules for this option        | every rule must pass |
//!
//! A rule passes when the vehicle's series code, wheelbase and drivetrain
//! are each in the rule's list for that dimension. Empty lists do not
//! constrain. Once any rule exists for an option its own
//! `compatible_series` list is not consulted.

use crate::catalog::{CategoryId, CompatibilityRule, OptionCategory, Vehicle, VehicleOption};

/// Whether `option` can be fitted to `vehicle` under `rules`.
pub fn is_compatible(
    option: &VehicleOption,
    vehicle: &Vehicle,
    rules: &[CompatibilityRule],
) -> bool {
    if rules.is_empty() {
        return true;
    }

    let mut matching = rules.iter().filter(|rule| rule.option_id == option.id).peekable();

    if matching.peek().is_none() {
        return option.compatible_series.is_empty()
            || option.compatible_series.contains(&vehicle.series_code);
    }

    matching.all(|rule| rule_allows(rule, vehicle))
}

/// Check one rule's non-empty constraint lists against the vehicle.
fn rule_allows(rule: &CompatibilityRule, vehicle: &Vehicle) -> bool {
    allows(&rule.compatible_series_codes, &vehicle.series_code)
        && allows(&rule.compatible_wheelbases, &vehicle.wheelbase)
        && allows(&rule.compatible_drivetrains, &vehicle.drivetrain)
}

fn allows<T: PartialEq>(allowed: &[T], value: &T) -> bool {
    allowed.is_empty() || allowed.contains(value)
}

/// Options from `options` that fit `vehicle`, in their original order.
pub fn compatible_options<'a>(
    options: &'a [VehicleOption],
    vehicle: &Vehicle,
    rules: &[CompatibilityRule],
) -> Vec<&'a VehicleOption> {
    options
        .iter()
        .filter(|option| is_compatible(option, vehicle, rules))
        .collect()
}

/// A named group of options for display
#[derive(Debug, Clone, PartialEq)]
pub struct OptionGroup<'a> {
    pub name: String,
    pub options: Vec<&'a VehicleOption>,
}

/// Group options under their category name, in order of first appearance.
///
/// Options whose category is missing or unknown land in `"Other"`.
pub fn group_by_category<'a>(
    options: &[&'a VehicleOption],
    categories: &[OptionCategory],
) -> Vec<OptionGroup<'a>> {
    let name_of = |id: Option<&CategoryId>| -> String {
        id.and_then(|id| categories.iter().find(|c| &c.id == id))
            .map_or_else(|| "Other".to_string(), |c| c.name.clone())
    };

    let mut groups: Vec<OptionGroup<'a>> = Vec::new();
    for &option in options {
        let name = name_of(option.category_id.as_ref());
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.options.push(option),
            None => groups.push(OptionGroup {
                name,
                options: vec![option],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{OptionId, VehicleId};

    fn vehicle(series: &str, wheelbase: u32, drivetrain: &str) -> Vehicle {
        Vehicle {
            id: VehicleId::from(series),
            series_code: series.to_string(),
            wheelbase,
            drivetrain: drivetrain.to_string(),
            gvwr: None,
            category: None,
            pricing: None,
            is_active: true,
        }
    }

    fn option(id: &str, series: &[&str]) -> VehicleOption {
        VehicleOption {
            id: OptionId::from(id),
            code: id.to_uppercase(),
            name: id.to_string(),
            description: None,
            category_id: None,
            category: None,
            is_standard: false,
            is_package: false,
            is_limited_production: false,
            compatible_series: series.iter().map(|s| s.to_string()).collect(),
            pricing: None,
            is_active: true,
        }
    }

    fn rule(option_id: &str) -> CompatibilityRule {
        CompatibilityRule {
            option_id: OptionId::from(option_id),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_rules_is_fail_open_even_with_series_list() {
        let opt = option("a", &["E450"]);
        assert!(is_compatible(&opt, &vehicle("E350", 138, "RWD"), &[]));
    }

    #[test]
    fn test_unrelated_rules_fall_back_to_series_list() {
        let rules = [rule("other")];
        let opt = option("a", &["E450"]);
        assert!(!is_compatible(&opt, &vehicle("E350", 138, "RWD"), &rules));
        assert!(is_compatible(&opt, &vehicle("E450", 158, "RWD"), &rules));
    }

    #[test]
    fn test_unrelated_rules_and_no_series_list_is_compatible() {
        let rules = [rule("other")];
        assert!(is_compatible(&option("a", &[]), &vehicle("E350", 138, "RWD"), &rules));
    }

    #[test]
    fn test_rule_checks_every_non_empty_dimension() {
        let mut r = rule("a");
        r.compatible_wheelbases = vec![158, 176];
        r.compatible_drivetrains = vec!["AWD".to_string()];
        let rules = [r];
        let opt = option("a", &[]);

        assert!(is_compatible(&opt, &vehicle("E350", 158, "AWD"), &rules));
        assert!(!is_compatible(&opt, &vehicle("E350", 138, "AWD"), &rules));
        assert!(!is_compatible(&opt, &vehicle("E350", 158, "RWD"), &rules));
    }

    #[test]
    fn test_all_matching_rules_must_pass() {
        let mut by_series = rule("a");
        by_series.compatible_series_codes = vec!["E350".to_string(), "E450".to_string()];
        let mut by_drive = rule("a");
        by_drive.compatible_drivetrains = vec!["RWD".to_string()];
        let rules = [by_series, by_drive];
        let opt = option("a", &[]);

        assert!(is_compatible(&opt, &vehicle("E450", 158, "RWD"), &rules));
        assert!(!is_compatible(&opt, &vehicle("E450", 158, "AWD"), &rules));
        assert!(!is_compatible(&opt, &vehicle("E550", 158, "RWD"), &rules));
    }

    #[test]
    fn test_rules_take_precedence_over_series_list() {
        let mut r = rule("a");
        r.compatible_series_codes = vec!["E350".to_string()];
        let opt = option("a", &["E450"]);
        assert!(is_compatible(&opt, &vehicle("E350", 138, "RWD"), &[r.clone()]));
        assert!(!is_compatible(&opt, &vehicle("E450", 138, "RWD"), &[r]));
    }

    #[test]
    fn test_empty_rule_imposes_no_restriction() {
        let opt = option("a", &["E450"]);
        assert!(is_compatible(&opt, &vehicle("E350", 138, "RWD"), &[rule("a")]));
    }

    #[test]
    fn test_compatible_options_preserves_order() {
        let options = vec![option("a", &[]), option("b", &["E450"]), option("c", &["E350"])];
        let rules = [rule("unrelated")];
        let fits = compatible_options(&options, &vehicle("E350", 138, "RWD"), &rules);
        let ids: Vec<_> = fits.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_group_by_category_uses_other_for_unknown() {
        let categories = vec![OptionCategory {
            id: CategoryId::from("1"),
            name: "Axles".to_string(),
            code: None,
            display_order: 1,
            is_active: true,
        }];
        let mut axle = option("axle", &[]);
        axle.category_id = Some(CategoryId::from("1"));
        let mut paint = option("paint", &[]);
        paint.category_id = Some(CategoryId::from("99"));
        let misc = option("misc", &[]);
        let mut axle2 = option("axle2", &[]);
        axle2.category_id = Some(CategoryId::from("1"));

        let all = [&axle, &paint, &misc, &axle2];
        let groups = group_by_category(&all, &categories);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Axles");
        assert_eq!(groups[0].options.len(), 2);
        assert_eq!(groups[1].name, "Other");
        assert_eq!(groups[1].options.len(), 2);
    }
}
