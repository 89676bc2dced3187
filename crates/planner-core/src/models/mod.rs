// ABOUTME: Domain model re-exports for concepts, teams, and proposal results
// ABOUTME: Plain data passed between the catalog, the engine, and callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

/// Training concepts and the category tree they hang from
pub mod concept;
/// Proposal request, response, and per-concept annotations
pub mod proposal;
/// Teams, seasons, age categories, and planning templates
pub mod team;

pub use concept::{CategoryNode, Concept};
pub use proposal::{
    ConceptTag, ProposalGroup, ProposalMetadata, ProposalPriority, ProposalRequest,
    ProposalResponse, ScoredConcept,
};
pub use team::{PlanningTemplate, Team, TeamCategory, TeamLevel, TeamProficiency, TeamSeason};
