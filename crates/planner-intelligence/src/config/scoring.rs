// ABOUTME: Scoring thresholds and fixed weights for the concept recommendation engine
// ABOUTME: Defaults reproduce the production constants exactly; env overrides go through mod.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

//! Scoring Configuration
//!
//! Classification thresholds and the weights that sit outside the age-based
//! technical/tactical profile. The age tables themselves are fixed lookups
//! in `weight_profile` and are not configurable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Score thresholds used for bucketing and priority decisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalThresholds {
    /// Minimum score for the suggested bucket
    pub suggested: Decimal,
    /// Minimum score for the optional bucket; anything lower is rejected
    pub optional: Decimal,
    /// Score at which a non-foundational concept is `Recommended` outright
    pub high_score_priority: Decimal,
    /// Teams whose average proficiency is below this are low-level teams
    pub low_level_team_average: Decimal,
}

impl Default for ProposalThresholds {
    fn default() -> Self {
        Self {
            suggested: Decimal::new(70, 2),
            optional: Decimal::new(40, 2),
            high_score_priority: Decimal::new(90, 2),
            low_level_team_average: Decimal::new(4, 0),
        }
    }
}

/// Weights added on top of the age-based technical/tactical profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight of the development level match
    pub development_level: Decimal,
    /// Cap of the team rank bonus
    pub team_level: Decimal,
    /// Bonus per rank above 1
    pub team_rank_step: Decimal,
    /// Match value used when a factor is unknown
    pub neutral_factor: Decimal,
    /// Flat bonus for pure technical concepts proposed to young teams
    pub pure_technical_bonus: Decimal,
    /// Oldest category minimum age eligible for the pure technical bonus
    pub pure_technical_max_age: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            development_level: Decimal::new(10, 2),
            team_level: Decimal::new(5, 2),
            team_rank_step: Decimal::new(2, 2),
            neutral_factor: Decimal::new(5, 1),
            pure_technical_bonus: Decimal::new(15, 2),
            pure_technical_max_age: 12,
        }
    }
}
