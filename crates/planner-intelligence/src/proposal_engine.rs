// ABOUTME: Orchestrates filtering, windowing, scoring, bucketing, tagging, and grouping
// ABOUTME: Pure and synchronous over an in-memory snapshot; scoring may run on rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

//! # Proposal Engine
//!
//! One call to [`ProposalEngine::generate`] runs the whole pipeline:
//!
//! 1. Request filters (active, section focus, exclusions, pinned ids)
//! 2. Expected development stage and level window, computed once
//! 3. Window filter (pinned concepts and stage-agnostic concepts always pass)
//! 4. Scoring map, parallel for large batches
//! 5. Suggested / optional bucketing and the suggestion cap
//! 6. Priority and tag assignment
//! 7. Category grouping
//!
//! The engine never fails. Missing optional inputs fall back to neutral
//! defaults and every score is clamped into [0, 1].

use crate::catalog_filter::CatalogFilter;
use crate::category_grouper::{CategoryGrouper, CategoryIndex};
use crate::classifier::{classify, Scored};
use crate::concept_scorer::ConceptScorer;
use crate::config::ProposalEngineConfig;
use crate::expected_level::resolve_expected_level;
use crate::level_window::LevelWindow;
use crate::priority::{determine_priority, PriorityContext};
use crate::reason::describe_score;
use crate::tagging::assign_tag;
use planner_core::models::{
    CategoryNode, Concept, PlanningTemplate, ProposalMetadata, ProposalPriority, ProposalRequest,
    ProposalResponse, ScoredConcept, TeamProficiency,
};
use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

/// Snapshot the engine reads for one request
#[derive(Debug, Clone, Copy)]
pub struct ProposalInput<'a> {
    /// Team levels, category, and rank for the requested season
    pub team: &'a TeamProficiency,
    /// Full concept catalog, inactive entries included
    pub concepts: &'a [Concept],
    /// Every category node the concepts may reference
    pub categories: &'a [CategoryNode],
    /// Template that pins the expected stage, if any
    pub template: Option<&'a PlanningTemplate>,
    /// Caller options
    pub request: &'a ProposalRequest,
}

/// A concept with its score and narration, before bucketing
#[derive(Debug, Clone)]
struct Candidate {
    concept: Concept,
    score: Decimal,
    reason: String,
}

impl Scored for Candidate {
    fn score(&self) -> Decimal {
        self.score
    }
}

/// Concept recommendation engine
#[derive(Debug, Clone)]
pub struct ProposalEngine {
    config: ProposalEngineConfig,
}

impl Default for ProposalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ProposalEngine {
    /// Create an engine from the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ProposalEngineConfig::global().clone(),
        }
    }

    /// Create an engine with an explicit configuration
    #[must_use]
    pub const fn with_config(config: ProposalEngineConfig) -> Self {
        Self { config }
    }

    /// Expected stage and level window for a team
    #[must_use]
    pub fn level_window(
        &self,
        team: &TeamProficiency,
        template: Option<&PlanningTemplate>,
        level_offset: i32,
    ) -> (i32, LevelWindow) {
        let expected = resolve_expected_level(template, team.category.as_ref());
        let window = LevelWindow::calculate(
            expected,
            team.technical_level,
            team.tactical_level,
            level_offset,
        );
        (expected, window)
    }

    /// Generate grouped proposals for one team
    ///
    /// The returned response has no team summary; callers that know the team
    /// attach it.
    #[must_use]
    pub fn generate(&self, input: &ProposalInput<'_>) -> ProposalResponse {
        let team = input.team;
        let request = input.request;

        let index = CategoryIndex::new(input.categories.iter().cloned());
        let catalog = CatalogFilter::new(&index, request).apply(input.concepts);
        let total_available = catalog.concepts.len();

        let (expected_level, window) =
            self.level_window(team, input.template, request.level_offset);

        let in_window: Vec<Concept> = catalog
            .concepts
            .iter()
            .filter(|concept| {
                request.skip_level_filter || catalog.is_pinned(concept) || window.admits(concept)
            })
            .cloned()
            .collect();
        let filtered_count = in_window.len();

        let candidates = self.score_all(in_window, team, expected_level);
        let average = average_score(&candidates);

        let thresholds = &self.config.thresholds;
        let buckets = classify(candidates, thresholds, request.max_concepts);

        debug!(
            "Proposal for team {} season {}: stage {expected_level}, window {}..={}, {total_available} available, {filtered_count} in window, {} suggested, {} optional, {} rejected",
            request.team_id,
            request.season_id,
            window.min,
            window.max,
            buckets.suggested.len(),
            buckets.optional.len(),
            buckets.rejected
        );

        let suggested_count = buckets.suggested.len();
        let optional_count = buckets.optional.len();

        let suggested: Vec<ScoredConcept> = buckets
            .suggested
            .into_iter()
            .map(|candidate| {
                let priority = determine_priority(&PriorityContext {
                    concept: &candidate.concept,
                    score: candidate.score,
                    technical_level: team.technical_level,
                    tactical_level: team.tactical_level,
                    expected_level,
                    high_score_threshold: thresholds.high_score_priority,
                });
                self.finish(candidate, priority, team, expected_level)
            })
            .collect();

        let optional: Vec<ScoredConcept> = buckets
            .optional
            .into_iter()
            .map(|candidate| {
                self.finish(candidate, ProposalPriority::Optional, team, expected_level)
            })
            .collect();

        let grouper = CategoryGrouper::new(&index, &self.config.grouping);

        ProposalResponse {
            team: None,
            suggested_groups: grouper.group(suggested),
            optional_groups: grouper.group(optional),
            metadata: ProposalMetadata {
                total_available_concepts: total_available,
                suggested_count,
                optional_count,
                average_team_match_score: average,
                expected_development_level: expected_level,
                min_level_window: window.min,
                max_level_window: window.max,
                filtered_concepts_count: filtered_count,
            },
        }
    }

    fn score_all(
        &self,
        concepts: Vec<Concept>,
        team: &TeamProficiency,
        expected_level: i32,
    ) -> Vec<Candidate> {
        let scorer = ConceptScorer::new(&self.config.weights, team, expected_level);
        let messages = &self.config.messages;
        let evaluate = |concept: Concept| {
            let score = scorer.score(&concept);
            let reason = describe_score(
                messages,
                &concept,
                team.technical_level,
                team.tactical_level,
                expected_level,
            );
            Candidate {
                concept,
                score,
                reason,
            }
        };

        let execution = &self.config.execution;
        if execution.parallel_scoring && concepts.len() >= execution.parallel_min_batch {
            concepts.into_par_iter().map(evaluate).collect()
        } else {
            concepts.into_iter().map(evaluate).collect()
        }
    }

    fn finish(
        &self,
        candidate: Candidate,
        priority: ProposalPriority,
        team: &TeamProficiency,
        expected_level: i32,
    ) -> ScoredConcept {
        let tag = assign_tag(
            &candidate.concept,
            expected_level,
            team.technical_level,
            team.tactical_level,
            self.config.thresholds.low_level_team_average,
        );
        ScoredConcept {
            concept: candidate.concept,
            score: candidate.score,
            score_reason: candidate.reason,
            priority,
            tag,
        }
    }
}

/// Mean score over every scored concept, zero when nothing was scored
fn average_score(candidates: &[Candidate]) -> Decimal {
    if candidates.is_empty() {
        return Decimal::ZERO;
    }
    let total: Decimal = candidates.iter().map(|candidate| candidate.score).sum();
    total / Decimal::from(candidates.len())
}
