// ABOUTME: In-memory catalog implementing ProposalDataSource over a JSON snapshot
// ABOUTME: Used by the CLI, integration tests, and benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use super::ProposalDataSource;
use crate::errors::{AppError, AppResult};
use crate::models::{CategoryNode, Concept, PlanningTemplate, Team, TeamSeason};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::debug;

/// Everything the proposal service reads, as one serializable document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    /// Known teams
    pub teams: Vec<Team>,
    /// Per-season team snapshots
    pub team_seasons: Vec<TeamSeason>,
    /// Concept catalog, inactive entries included
    pub concepts: Vec<Concept>,
    /// Category forest
    pub categories: Vec<CategoryNode>,
    /// Planning templates
    pub planning_templates: Vec<PlanningTemplate>,
}

impl CatalogSnapshot {
    /// Parse a snapshot from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not match the snapshot layout
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a team
    #[must_use]
    pub fn with_team(mut self, team: Team) -> Self {
        self.teams.push(team);
        self
    }

    /// Add a season snapshot
    #[must_use]
    pub fn with_team_season(mut self, season: TeamSeason) -> Self {
        self.team_seasons.push(season);
        self
    }

    /// Add concepts
    #[must_use]
    pub fn with_concepts(mut self, concepts: impl IntoIterator<Item = Concept>) -> Self {
        self.concepts.extend(concepts);
        self
    }

    /// Add categories
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = CategoryNode>) -> Self {
        self.categories.extend(categories);
        self
    }

    /// Add a planning template
    #[must_use]
    pub fn with_planning_template(mut self, template: PlanningTemplate) -> Self {
        self.planning_templates.push(template);
        self
    }
}

/// Read-only catalog shared cheaply between tasks
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    snapshot: Arc<CatalogSnapshot>,
}

impl InMemoryCatalog {
    /// Wrap a snapshot
    #[must_use]
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Load a snapshot from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or a serialization
    /// error if its content is not a valid snapshot
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("Failed to read catalog snapshot: {e}"))
                .with_resource_id(path.display().to_string())
                .with_source(e)
        })?;
        let snapshot = CatalogSnapshot::from_json(&content)
            .map_err(|e| e.with_resource_id(path.display().to_string()))?;

        debug!(
            "Loaded catalog snapshot from {}: {} teams, {} concepts, {} categories",
            path.display(),
            snapshot.teams.len(),
            snapshot.concepts.len(),
            snapshot.categories.len()
        );
        Ok(Self::new(snapshot))
    }

    /// Underlying snapshot
    #[must_use]
    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl ProposalDataSource for InMemoryCatalog {
    async fn get_team(&self, team_id: i64) -> AppResult<Option<Team>> {
        Ok(self.snapshot.teams.iter().find(|t| t.id == team_id).cloned())
    }

    async fn get_team_season(
        &self,
        team_id: i64,
        season_id: i64,
    ) -> AppResult<Option<TeamSeason>> {
        Ok(self
            .snapshot
            .team_seasons
            .iter()
            .find(|s| s.team_id == team_id && s.season_id == season_id)
            .cloned())
    }

    async fn list_active_concepts(&self) -> AppResult<Vec<Concept>> {
        Ok(self
            .snapshot
            .concepts
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> AppResult<Vec<CategoryNode>> {
        Ok(self.snapshot.categories.clone())
    }

    async fn get_planning_template(
        &self,
        template_id: i64,
    ) -> AppResult<Option<PlanningTemplate>> {
        Ok(self
            .snapshot
            .planning_templates
            .iter()
            .find(|t| t.id == template_id)
            .cloned())
    }
}
