// ABOUTME: Async data-source abstraction feeding the proposal service
// ABOUTME: Persistence layers implement ProposalDataSource; InMemoryCatalog serves JSON snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

//! # Data Sources
//!
//! The engine itself is synchronous. Everything it reads is fetched up front
//! through [`ProposalDataSource`], so swapping the in-memory catalog for a
//! database only means implementing this trait.

/// JSON-backed in-memory catalog
pub mod memory;

pub use memory::{CatalogSnapshot, InMemoryCatalog};

use crate::errors::AppResult;
use crate::models::{CategoryNode, Concept, PlanningTemplate, Team, TeamSeason};
use async_trait::async_trait;

/// Read access to teams, seasons, catalog, and templates
#[async_trait]
pub trait ProposalDataSource: Send + Sync {
    /// Look up a team by id
    async fn get_team(&self, team_id: i64) -> AppResult<Option<Team>>;

    /// Team snapshot for one season
    async fn get_team_season(&self, team_id: i64, season_id: i64)
        -> AppResult<Option<TeamSeason>>;

    /// Every active concept, in catalog order
    async fn list_active_concepts(&self) -> AppResult<Vec<Concept>>;

    /// Every category node
    async fn list_categories(&self) -> AppResult<Vec<CategoryNode>>;

    /// Look up a planning template by id
    async fn get_planning_template(&self, template_id: i64)
        -> AppResult<Option<PlanningTemplate>>;
}
