// ABOUTME: Intelligence module re-exports from planner-intelligence crate
// ABOUTME: Gives application code crate::intelligence paths for the engine and its config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

//! # Intelligence Module
//!
//! Re-exports the recommendation engine from the `planner-intelligence` crate.

// Re-export all public items from planner-intelligence
pub use planner_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::config::ProposalThresholds)
pub use planner_intelligence::{
    catalog_filter, category_grouper, classifier, concept_scorer, config, expected_level,
    level_match, level_window, priority, proposal_engine, reason, tagging, weight_profile,
};
