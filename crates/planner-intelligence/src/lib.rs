// ABOUTME: Concept recommendation engine for team training plans
// ABOUTME: Scores catalog concepts against team proficiency and groups them by category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

#![deny(unsafe_code)]

//! # Planner Intelligence
//!
//! Stateless scoring of training concepts for a team. Everything here is a
//! pure function of an in-memory snapshot; persistence and request handling
//! live in the application crate.
//!
//! ## Modules
//!
//! - **level_match**: Gap-to-score lookup shared by every level comparison
//! - **weight_profile**: Age-dependent technical/tactical weights
//! - **expected_level**: Expected curriculum stage for a team
//! - **level_window**: Development level window around that stage
//! - **concept_scorer**: Multi-criteria score, plus **reason** narration
//! - **classifier**, **priority**, **tagging**: Bucketing and labelling
//! - **category_grouper**: Bounded category walks and grouping
//! - **catalog_filter**: Request filters applied before scoring
//! - **proposal_engine**: The end-to-end pipeline

/// Engine configuration with environment overrides
pub mod config;

/// Level difference lookup table
pub mod level_match;

/// Age-bracketed technical/tactical weights
pub mod weight_profile;

/// Expected development stage resolution
pub mod expected_level;

/// Development level window calculation
pub mod level_window;

/// Concept scoring
pub mod concept_scorer;

/// Human-readable score reasons
pub mod reason;

/// Suggested / optional bucketing
pub mod classifier;

/// Suggested-concept priority rules
pub mod priority;

/// Stage tags
pub mod tagging;

/// Category index and grouping
pub mod category_grouper;

/// Request-level catalog filters
pub mod catalog_filter;

/// End-to-end proposal pipeline
pub mod proposal_engine;

pub use category_grouper::{CategoryGrouper, CategoryIndex};
pub use concept_scorer::{ConceptScorer, ScoreBreakdown};
pub use config::{ConfigError, ProposalEngineConfig};
pub use level_match::level_match;
pub use level_window::LevelWindow;
pub use proposal_engine::{ProposalEngine, ProposalInput};
pub use weight_profile::{resolve_weight_profile, WeightProfile};
