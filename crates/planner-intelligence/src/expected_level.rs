// ABOUTME: Derives the curriculum stage a team is expected to be working on
// ABOUTME: Template level wins, then category minimum age, then category name patterns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use planner_core::constants::development_levels::{DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL};
use planner_core::models::{PlanningTemplate, TeamCategory};

/// Ordered (max age, stage) pairs; ages above the last bound map to `MAX_LEVEL`
const AGE_STAGES: [(i32, i32); 5] = [(8, 1), (10, 2), (12, 3), (14, 4), (16, 5)];

/// Ordered (name fragments, stage) pairs matched against a lowercase category name
const NAME_STAGES: [(&[&str], i32); 6] = [
    (&["mini", "escuela"], 1),
    (&["u10", "pre"], 2),
    (&["u12", "alevin"], 3),
    (&["u14", "infantil"], 4),
    (&["u16", "cadete"], 5),
    (&["junior", "senior"], 6),
];

/// Resolve the expected development stage, always within [1, 6]
///
/// An explicit template pins the stage. Otherwise the team category decides,
/// by minimum age when known and by name otherwise. Teams without a category
/// default to the middle stage.
#[must_use]
pub fn resolve_expected_level(
    template: Option<&PlanningTemplate>,
    category: Option<&TeamCategory>,
) -> i32 {
    if let Some(template) = template {
        return template.level.clamp(MIN_LEVEL, MAX_LEVEL);
    }

    category.map_or(DEFAULT_LEVEL, level_for_category)
}

/// Stage implied by a team category alone
#[must_use]
pub fn level_for_category(category: &TeamCategory) -> i32 {
    category
        .min_age
        .map_or_else(|| level_for_name(&category.name), level_for_age)
}

/// Stage implied by a minimum age
#[must_use]
pub fn level_for_age(min_age: i32) -> i32 {
    AGE_STAGES
        .iter()
        .find(|(max_age, _)| min_age <= *max_age)
        .map_or(MAX_LEVEL, |(_, stage)| *stage)
}

/// Stage implied by a category name, case-insensitively
#[must_use]
pub fn level_for_name(name: &str) -> i32 {
    let name = name.to_lowercase();
    NAME_STAGES
        .iter()
        .find(|(fragments, _)| fragments.iter().any(|fragment| name.contains(fragment)))
        .map_or(DEFAULT_LEVEL, |(_, stage)| *stage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(level: i32) -> PlanningTemplate {
        PlanningTemplate {
            id: 7,
            name: "Itinerario".to_owned(),
            code: None,
            level,
        }
    }

    #[test]
    fn test_template_overrides_category() {
        let category = TeamCategory::with_ages(1, "U12", 11, 12);
        assert_eq!(resolve_expected_level(Some(&template(5)), Some(&category)), 5);
    }

    #[test]
    fn test_template_level_is_clamped() {
        assert_eq!(resolve_expected_level(Some(&template(9)), None), 6);
        assert_eq!(resolve_expected_level(Some(&template(0)), None), 1);
    }

    #[test]
    fn test_age_mapping() {
        let cases = [(6, 1), (8, 1), (9, 2), (11, 3), (13, 4), (15, 5), (16, 5), (17, 6), (30, 6)];
        for (age, stage) in cases {
            assert_eq!(level_for_age(age), stage, "age {age}");
        }
    }

    #[test]
    fn test_name_fallback_in_order() {
        assert_eq!(level_for_name("Minibasket"), 1);
        assert_eq!(level_for_name("ESCUELA"), 1);
        assert_eq!(level_for_name("U10 mixto"), 2);
        assert_eq!(level_for_name("Pre-Infantil"), 2);
        assert_eq!(level_for_name("U12"), 3);
        assert_eq!(level_for_name("Alevin A"), 3);
        assert_eq!(level_for_name("u14 femenino"), 4);
        assert_eq!(level_for_name("Infantil B"), 4);
        assert_eq!(level_for_name("U16"), 5);
        assert_eq!(level_for_name("Cadete"), 5);
        assert_eq!(level_for_name("Junior"), 6);
        assert_eq!(level_for_name("Senior"), 6);
        assert_eq!(level_for_name("Veteranos"), 3);
    }

    #[test]
    fn test_age_takes_precedence_over_name() {
        let category = TeamCategory::with_ages(1, "Senior", 7, 8);
        assert_eq!(resolve_expected_level(None, Some(&category)), 1);
    }

    #[test]
    fn test_missing_category_defaults_to_middle_stage() {
        assert_eq!(resolve_expected_level(None, None), 3);
        let unnamed = TeamCategory::named(2, "Equipo B");
        assert_eq!(resolve_expected_level(None, Some(&unnamed)), 3);
    }
}
