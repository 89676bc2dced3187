// ABOUTME: Tags a concept relative to the team's expected development stage
// ABOUTME: Earlier-stage concepts become reinforcement work for low-level teams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use crate::level_window::proficiency_average;
use planner_core::models::{Concept, ConceptTag};
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// Assign a stage tag to a concept
///
/// Concepts without a development stage are always `Own`.
#[must_use]
pub fn assign_tag(
    concept: &Concept,
    expected_level: i32,
    technical_level: i32,
    tactical_level: i32,
    low_level_team_average: Decimal,
) -> ConceptTag {
    let Some(level) = concept.development_level else {
        return ConceptTag::Own;
    };

    match level.cmp(&expected_level) {
        Ordering::Equal => ConceptTag::Own,
        Ordering::Greater => ConceptTag::Aspirational,
        Ordering::Less => {
            if proficiency_average(technical_level, tactical_level) < low_level_team_average {
                ConceptTag::Reinforcement
            } else {
                ConceptTag::Inherited
            }
        }
    }
}
