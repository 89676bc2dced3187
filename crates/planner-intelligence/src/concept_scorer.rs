// ABOUTME: Multi-criteria concept scoring against a team's proficiency snapshot
// ABOUTME: Combines age-weighted technical/tactical matches, stage fit, rank bonus, and youth bonus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

//! Concept scorer
//!
//! ```text
//! score = clamp01(
//!     match(technical_difficulty, technical_level) * tech_weight
//!   + tactical_match * tac_weight           // 1.0 for pure technical concepts
//!   + stage_match * 0.10                    // 0.5 when the concept has no stage
//!   + rank_bonus                            // min((rank - 1) * 0.02, 0.05), or 0.5 * 0.05
//!   + 0.15 if min_age <= 12 and pure technical
//! )
//! ```
//!
//! The additive components may exceed 1.0 before clamping.

use crate::config::ScoringWeights;
use crate::level_match::level_match;
use crate::weight_profile::{resolve_weight_profile, WeightProfile};
use planner_core::models::{Concept, TeamProficiency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Weighted contribution of every scoring factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Technical match times technical weight
    pub technical: Decimal,
    /// Tactical match times tactical weight
    pub tactical: Decimal,
    /// Development stage match times its weight
    pub development: Decimal,
    /// Team rank bonus
    pub team_level: Decimal,
    /// Flat youth bonus for pure technical concepts
    pub pure_technical_bonus: Decimal,
    /// Sum before clamping
    pub raw: Decimal,
    /// Final score within [0, 1]
    pub score: Decimal,
}

/// Scores concepts for one team against one expected stage
#[derive(Debug, Clone, Copy)]
pub struct ConceptScorer<'a> {
    weights: &'a ScoringWeights,
    team: &'a TeamProficiency,
    profile: WeightProfile,
    expected_level: i32,
}

impl<'a> ConceptScorer<'a> {
    /// Create a scorer; the weight profile is resolved once per team
    #[must_use]
    pub fn new(
        weights: &'a ScoringWeights,
        team: &'a TeamProficiency,
        expected_level: i32,
    ) -> Self {
        Self {
            weights,
            team,
            profile: resolve_weight_profile(team.min_age()),
            expected_level,
        }
    }

    /// Score of a concept within [0, 1]
    #[must_use]
    pub fn score(&self, concept: &Concept) -> Decimal {
        self.breakdown(concept).score
    }

    /// Every weighted component of a concept's score
    #[must_use]
    pub fn breakdown(&self, concept: &Concept) -> ScoreBreakdown {
        let technical = level_match(concept.technical_difficulty, self.team.technical_level)
            * self.profile.technical;

        let tactical_match = if concept.is_pure_technical() {
            Decimal::ONE
        } else {
            level_match(concept.tactical_complexity, self.team.tactical_level)
        };
        let tactical = tactical_match * self.profile.tactical;

        let development_match = concept
            .development_level
            .map_or(self.weights.neutral_factor, |level| {
                level_match(level, self.expected_level)
            });
        let development = development_match * self.weights.development_level;

        let team_level = self.team.rank().map_or_else(
            || self.weights.neutral_factor * self.weights.team_level,
            |rank| {
                ((Decimal::from(rank) - Decimal::ONE) * self.weights.team_rank_step)
                    .min(self.weights.team_level)
            },
        );

        let pure_technical_bonus = if self.is_young_team() && concept.is_pure_technical() {
            self.weights.pure_technical_bonus
        } else {
            Decimal::ZERO
        };

        let raw = technical + tactical + development + team_level + pure_technical_bonus;

        ScoreBreakdown {
            technical,
            tactical,
            development,
            team_level,
            pure_technical_bonus,
            raw,
            score: raw.clamp(Decimal::ZERO, Decimal::ONE),
        }
    }

    fn is_young_team(&self) -> bool {
        self.team
            .min_age()
            .is_some_and(|age| age <= self.weights.pure_technical_max_age)
    }
}
