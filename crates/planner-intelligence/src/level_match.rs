// ABOUTME: Asymmetric distance-to-score lookup shared by every scoring dimension
// ABOUTME: Rewards concepts slightly above current ability more than those below it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

//! Level match function
//!
//! Maps `required - current` to a match value through a fixed table:
//!
//! | diff  | < -3 | -3   | -2   | -1   | 0    | 1    | 2    | 3    | > 3  |
//! |-------|------|------|------|------|------|------|------|------|------|
//! | score | 0.30 | 0.50 | 0.70 | 0.85 | 1.00 | 0.95 | 0.75 | 0.50 | 0.20 |
//!
//! A concept one step above the team (0.95) beats one a step below (0.85).

use rust_decimal::Decimal;

/// Match value of a requirement against a current level
#[must_use]
pub fn level_match(required: i32, current: i32) -> Decimal {
    match_for_difference(required.saturating_sub(current))
}

/// Match value for a precomputed `required - current` difference
#[must_use]
pub fn match_for_difference(difference: i32) -> Decimal {
    match difference {
        // Easier than current ability
        i32::MIN..=-4 => Decimal::new(30, 2),
        -3 => Decimal::new(50, 2),
        -2 => Decimal::new(70, 2),
        -1 => Decimal::new(85, 2),
        0 => Decimal::ONE,
        // Harder than current ability
        1 => Decimal::new(95, 2),
        2 => Decimal::new(75, 2),
        3 => Decimal::new(50, 2),
        4..=i32::MAX => Decimal::new(20, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_table() {
        let expected = [
            (-10, Decimal::new(30, 2)),
            (-4, Decimal::new(30, 2)),
            (-3, Decimal::new(50, 2)),
            (-2, Decimal::new(70, 2)),
            (-1, Decimal::new(85, 2)),
            (0, Decimal::ONE),
            (1, Decimal::new(95, 2)),
            (2, Decimal::new(75, 2)),
            (3, Decimal::new(50, 2)),
            (4, Decimal::new(20, 2)),
            (12, Decimal::new(20, 2)),
        ];

        for (difference, score) in expected {
            assert_eq!(
                level_match(5 + difference, 5),
                score,
                "difference {difference}"
            );
        }
    }

    #[test]
    fn test_identity_is_perfect_match() {
        for level in [-3, 0, 1, 6, 10, 1000] {
            assert_eq!(level_match(level, level), Decimal::ONE);
        }
    }

    #[test]
    fn test_progressive_challenge_bias() {
        assert!(level_match(6, 5) > level_match(4, 5));
        assert_eq!(level_match(8, 5), level_match(2, 5));
        assert!(level_match(9, 5) < level_match(1, 5));
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        assert_eq!(level_match(i32::MAX, i32::MIN), Decimal::new(20, 2));
        assert_eq!(level_match(i32::MIN, i32::MAX), Decimal::new(30, 2));
    }
}
