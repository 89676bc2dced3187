// ABOUTME: First-match-wins priority rules for concepts in the suggested bucket
// ABOUTME: Rule order is load-bearing: foundational concepts outrank high scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use planner_core::models::{Concept, ProposalPriority};
use rust_decimal::Decimal;

/// Highest difficulty and complexity a foundational concept may have
const FOUNDATIONAL_MAX_DIFFICULTY: i32 = 2;

/// Everything a rule needs to decide
#[derive(Debug, Clone, Copy)]
pub struct PriorityContext<'a> {
    /// Concept being prioritised
    pub concept: &'a Concept,
    /// Its clamped score
    pub score: Decimal,
    /// Team technical level
    pub technical_level: i32,
    /// Team tactical level
    pub tactical_level: i32,
    /// Expected development stage of the team
    pub expected_level: i32,
    /// Score at which a concept is recommended outright
    pub high_score_threshold: Decimal,
}

struct PriorityRule {
    matches: fn(&PriorityContext<'_>) -> bool,
    priority: ProposalPriority,
}

const PRIORITY_RULES: [PriorityRule; 3] = [
    PriorityRule {
        matches: is_foundational,
        priority: ProposalPriority::Essential,
    },
    PriorityRule {
        matches: is_high_score,
        priority: ProposalPriority::Recommended,
    },
    PriorityRule {
        matches: is_progressive_step,
        priority: ProposalPriority::Progressive,
    },
];

fn is_foundational(ctx: &PriorityContext<'_>) -> bool {
    ctx.concept.technical_difficulty <= FOUNDATIONAL_MAX_DIFFICULTY
        && ctx.concept.tactical_complexity <= FOUNDATIONAL_MAX_DIFFICULTY
        && ctx
            .concept
            .development_level
            .is_some_and(|level| level <= ctx.expected_level)
}

fn is_high_score(ctx: &PriorityContext<'_>) -> bool {
    ctx.score >= ctx.high_score_threshold
}

fn is_progressive_step(ctx: &PriorityContext<'_>) -> bool {
    let one_or_two_ahead = |gap: i32| matches!(gap, 1 | 2);
    one_or_two_ahead(
        ctx.concept
            .technical_difficulty
            .saturating_sub(ctx.technical_level),
    ) || one_or_two_ahead(
        ctx.concept
            .tactical_complexity
            .saturating_sub(ctx.tactical_level),
    )
}

/// Decide the priority of a suggested concept
///
/// Never returns `Optional`; that value labels the optional bucket.
#[must_use]
pub fn determine_priority(ctx: &PriorityContext<'_>) -> ProposalPriority {
    PRIORITY_RULES
        .iter()
        .find(|rule| (rule.matches)(ctx))
        .map_or(ProposalPriority::Recommended, |rule| rule.priority)
}
