// ABOUTME: Proposal request and response types for the concept recommendation engine
// ABOUTME: Includes the priority and tag taxonomies attached to every scored concept
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Concept, Team};

/// Parameters of a proposal generation request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalRequest {
    /// Team to generate proposals for
    pub team_id: i64,
    /// Season whose proficiency snapshot is used
    pub season_id: i64,
    /// Planning length in days; accepted for callers, no effect on scoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    /// Cap on the number of suggested concepts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concepts: Option<usize>,
    /// Categories whose concepts are dropped before scoring
    pub exclude_category_ids: Vec<i64>,
    /// Concepts kept regardless of section, exclusion, and level filters
    pub include_concept_ids: Vec<i64>,
    /// Section or category name to focus on (e.g. "Ataque")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_focus: Option<String>,
    /// Shift applied to the level window (-1 reinforcement, +1 aspirational)
    pub level_offset: i32,
    /// Template overriding the age-derived development stage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planning_template_id: Option<i64>,
    /// Disable development level window filtering
    pub skip_level_filter: bool,
}

impl ProposalRequest {
    /// Create a request with every optional filter unset
    #[must_use]
    pub fn new(team_id: i64, season_id: i64) -> Self {
        Self {
            team_id,
            season_id,
            ..Self::default()
        }
    }
}

/// Recommendation strength of a scored concept
///
/// `Essential`, `Recommended`, and `Progressive` come from the priority
/// decision tree. `Optional` is only ever assigned to concepts landing in
/// the optional bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalPriority {
    /// Foundational, on-stage concept the team must cover
    Essential,
    /// Strong match for the team
    Recommended,
    /// Slightly above current ability
    Progressive,
    /// Member of the optional bucket
    Optional,
}

impl ProposalPriority {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Recommended => "recommended",
            Self::Progressive => "progressive",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for ProposalPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pedagogical relationship between a concept and the team's expected stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptTag {
    /// Belongs to the team's current stage
    Own,
    /// From an earlier stage, to consolidate
    Inherited,
    /// From an earlier stage, needing extra work for a low-level team
    Reinforcement,
    /// From a later stage
    Aspirational,
}

impl ConceptTag {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Inherited => "inherited",
            Self::Reinforcement => "reinforcement",
            Self::Aspirational => "aspirational",
        }
    }
}

impl fmt::Display for ConceptTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concept with its match score and annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredConcept {
    /// The concept that was scored
    pub concept: Concept,
    /// Match score, always within [0, 1]
    pub score: Decimal,
    /// Human-readable narration of the score
    pub score_reason: String,
    /// Recommendation strength
    pub priority: ProposalPriority,
    /// Relationship to the team's expected stage
    pub tag: ConceptTag,
}

/// Scored concepts sharing the same category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalGroup {
    /// Leaf category id (0 for uncategorized concepts)
    pub category_id: i64,
    /// Display path, e.g. "Ataque > Técnica Individual > Bote"
    pub category_name: String,
    /// Root section name, e.g. "Ataque"
    pub section: String,
    /// Concepts ordered by descending score
    pub concepts: Vec<ScoredConcept>,
}

/// Summary figures of a proposal run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalMetadata {
    /// Concepts that passed the request filters, before the level window
    pub total_available_concepts: usize,
    /// Concepts in suggested groups (after `max_concepts`)
    pub suggested_count: usize,
    /// Concepts in optional groups
    pub optional_count: usize,
    /// Mean score over every scored concept, 0 when none were scored
    pub average_team_match_score: Decimal,
    /// Development stage the team is expected to be working on
    pub expected_development_level: i32,
    /// Lower bound of the development level window
    pub min_level_window: i32,
    /// Upper bound of the development level window
    pub max_level_window: i32,
    /// Concepts that passed the level window and were scored
    pub filtered_concepts_count: usize,
}

/// Full result of a proposal run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalResponse {
    /// Team the proposal was generated for, filled by the service layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    /// Groups of concepts scoring at or above the suggested threshold
    pub suggested_groups: Vec<ProposalGroup>,
    /// Groups of concepts scoring in the optional band
    pub optional_groups: Vec<ProposalGroup>,
    /// Summary figures
    pub metadata: ProposalMetadata,
}

impl ProposalResponse {
    /// Iterate every suggested concept across groups
    pub fn suggested_concepts(&self) -> impl Iterator<Item = &ScoredConcept> {
        self.suggested_groups.iter().flat_map(|g| g.concepts.iter())
    }

    /// Iterate every optional concept across groups
    pub fn optional_concepts(&self) -> impl Iterator<Item = &ScoredConcept> {
        self.optional_groups.iter().flat_map(|g| g.concepts.iter())
    }
}
