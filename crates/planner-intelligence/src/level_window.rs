// ABOUTME: Computes the inclusive development level window relevant to a team
// ABOUTME: Strong teams extend the ceiling, weak teams extend the floor, never both
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use planner_core::constants::development_levels::{MAX_LEVEL, MIN_LEVEL};
use planner_core::models::Concept;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Proficiency average considered neutral for window placement
const NEUTRAL_AVERAGE: i64 = 5;

/// Proficiency points that shift the window by one stage (2.5)
fn points_per_stage() -> Decimal {
    Decimal::new(25, 1)
}

/// Mean of the technical and tactical levels, kept exact
#[must_use]
pub fn proficiency_average(technical_level: i32, tactical_level: i32) -> Decimal {
    (Decimal::from(technical_level) + Decimal::from(tactical_level)) / Decimal::TWO
}

/// Inclusive range of development levels, `1 <= min <= max <= 6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelWindow {
    /// Lowest included stage
    pub min: i32,
    /// Highest included stage
    pub max: i32,
}

impl LevelWindow {
    /// Compute the window around `base_level` for a team's proficiency
    ///
    /// `adjustment = (avg - 5) / 2.5 + offset`. A non-negative adjustment keeps
    /// the floor one stage under the base and raises the ceiling by
    /// `ceil(adjustment) + 1`; a negative one lowers the floor by
    /// `floor(adjustment) - 1` and caps the ceiling at the base. The window
    /// always spans at least two stages when the scale allows it.
    #[must_use]
    pub fn calculate(
        base_level: i32,
        technical_level: i32,
        tactical_level: i32,
        offset: i32,
    ) -> Self {
        let base = i64::from(base_level.clamp(MIN_LEVEL, MAX_LEVEL));
        let floor_bound = i64::from(MIN_LEVEL);
        let ceiling_bound = i64::from(MAX_LEVEL);

        let adjustment = Self::adjustment(technical_level, tactical_level, offset);

        let (min, mut max) = if adjustment >= Decimal::ZERO {
            let raise = adjustment.ceil().to_i64().unwrap_or(i64::MAX);
            (
                (base - 1).max(floor_bound),
                base.saturating_add(raise).saturating_add(1).min(ceiling_bound),
            )
        } else {
            let lower = adjustment.floor().to_i64().unwrap_or(i64::MIN);
            (
                base.saturating_add(lower).saturating_sub(1).max(floor_bound),
                base,
            )
        };

        if max - min < 1 {
            max = (min + 1).min(ceiling_bound);
        }

        // Both bounds sit within [MIN_LEVEL, MAX_LEVEL] here
        Self {
            min: i32::try_from(min).unwrap_or(MIN_LEVEL),
            max: i32::try_from(max).unwrap_or(MAX_LEVEL),
        }
    }

    /// Window shift implied by proficiency and manual offset
    #[must_use]
    pub fn adjustment(technical_level: i32, tactical_level: i32, offset: i32) -> Decimal {
        let average = proficiency_average(technical_level, tactical_level);
        (average - Decimal::from(NEUTRAL_AVERAGE)) / points_per_stage() + Decimal::from(offset)
    }

    /// True when `level` lies inside the window
    #[must_use]
    pub const fn contains(&self, level: i32) -> bool {
        self.min <= level && level <= self.max
    }

    /// Concepts without a development level always pass
    #[must_use]
    pub fn admits(&self, concept: &Concept) -> bool {
        concept
            .development_level
            .is_none_or(|level| self.contains(level))
    }
}
