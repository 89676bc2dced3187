// ABOUTME: Age-driven technical/tactical weight profile for concept scoring
// ABOUTME: Young teams weigh technique heavily, older teams shift weight to tactics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Technical and tactical weights applied to the two match dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightProfile {
    /// Weight of the technical match
    pub technical: Decimal,
    /// Weight of the tactical match
    pub tactical: Decimal,
}

impl WeightProfile {
    /// Build a profile from percentages
    #[must_use]
    pub fn from_percent(technical: i64, tactical: i64) -> Self {
        Self {
            technical: Decimal::new(technical, 2),
            tactical: Decimal::new(tactical, 2),
        }
    }
}

/// Upper age bound of a bracket and the percentages it maps to
struct AgeBracket {
    max_age: i32,
    technical_percent: i64,
    tactical_percent: i64,
}

/// Ordered brackets, first bracket whose `max_age` covers the age wins
const AGE_BRACKETS: [AgeBracket; 5] = [
    // Escuela
    AgeBracket {
        max_age: 8,
        technical_percent: 80,
        tactical_percent: 5,
    },
    // Pre-mini
    AgeBracket {
        max_age: 10,
        technical_percent: 75,
        tactical_percent: 10,
    },
    // Alevín
    AgeBracket {
        max_age: 12,
        technical_percent: 65,
        tactical_percent: 20,
    },
    // Infantil
    AgeBracket {
        max_age: 14,
        technical_percent: 50,
        tactical_percent: 35,
    },
    // Cadete
    AgeBracket {
        max_age: 16,
        technical_percent: 40,
        tactical_percent: 45,
    },
];

/// Junior and senior teams
const OLDEST_PERCENT: (i64, i64) = (35, 50);

/// Category without a known minimum age
const UNKNOWN_AGE_PERCENT: (i64, i64) = (50, 35);

/// Resolve the weight profile for a category's minimum age
#[must_use]
pub fn resolve_weight_profile(min_age: Option<i32>) -> WeightProfile {
    let Some(age) = min_age else {
        return WeightProfile::from_percent(UNKNOWN_AGE_PERCENT.0, UNKNOWN_AGE_PERCENT.1);
    };

    AGE_BRACKETS
        .iter()
        .find(|bracket| age <= bracket.max_age)
        .map_or_else(
            || WeightProfile::from_percent(OLDEST_PERCENT.0, OLDEST_PERCENT.1),
            |bracket| {
                WeightProfile::from_percent(bracket.technical_percent, bracket.tactical_percent)
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(technical: i64, tactical: i64) -> WeightProfile {
        WeightProfile::from_percent(technical, tactical)
    }

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(resolve_weight_profile(Some(5)), profile(80, 5));
        assert_eq!(resolve_weight_profile(Some(8)), profile(80, 5));
        assert_eq!(resolve_weight_profile(Some(9)), profile(75, 10));
        assert_eq!(resolve_weight_profile(Some(10)), profile(75, 10));
        assert_eq!(resolve_weight_profile(Some(11)), profile(65, 20));
        assert_eq!(resolve_weight_profile(Some(12)), profile(65, 20));
        assert_eq!(resolve_weight_profile(Some(14)), profile(50, 35));
        assert_eq!(resolve_weight_profile(Some(16)), profile(40, 45));
        assert_eq!(resolve_weight_profile(Some(17)), profile(35, 50));
        assert_eq!(resolve_weight_profile(Some(40)), profile(35, 50));
    }

    #[test]
    fn test_unknown_age_is_balanced() {
        assert_eq!(resolve_weight_profile(None), profile(50, 35));
    }

    #[test]
    fn test_negative_age_falls_in_youngest_bracket() {
        assert_eq!(resolve_weight_profile(Some(-1)), profile(80, 5));
    }
}
