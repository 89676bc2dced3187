// ABOUTME: Concept proposal service: loads a team snapshot and runs the recommendation engine
// ABOUTME: Unknown teams fail before any scoring; missing season data scores with neutral levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use crate::data::ProposalDataSource;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{ProposalEngine, ProposalInput};
use crate::models::{ProposalRequest, ProposalResponse, TeamProficiency};
use tracing::{debug, info};

/// Generates concept proposals for teams from a data source
pub struct ConceptProposalService<D: ProposalDataSource> {
    data: D,
    engine: ProposalEngine,
}

impl<D: ProposalDataSource> ConceptProposalService<D> {
    /// Create a service using the globally configured engine
    #[must_use]
    pub fn new(data: D) -> Self {
        Self {
            data,
            engine: ProposalEngine::new(),
        }
    }

    /// Create a service with a specific engine
    #[must_use]
    pub const fn with_engine(data: D, engine: ProposalEngine) -> Self {
        Self { data, engine }
    }

    /// Generate proposals for the team and season named in the request
    ///
    /// A team without a record for the requested season is scored with levels
    /// 0/0 and no category or competitive level.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the team does not exist, or any error
    /// raised by the data source
    pub async fn generate_proposals(
        &self,
        request: &ProposalRequest,
    ) -> AppResult<ProposalResponse> {
        let team = self.data.get_team(request.team_id).await?.ok_or_else(|| {
            AppError::not_found(format!("Team with ID {}", request.team_id))
                .with_resource_id(request.team_id.to_string())
        })?;

        let proficiency = self
            .data
            .get_team_season(request.team_id, request.season_id)
            .await?
            .map_or_else(TeamProficiency::default, |season| season.proficiency());

        let template = match request.planning_template_id {
            Some(template_id) => {
                let template = self.data.get_planning_template(template_id).await?;
                if template.is_none() {
                    debug!(
                        "Planning template {template_id} not found, using team category for stage"
                    );
                }
                template
            }
            None => None,
        };

        let (concepts, categories) = tokio::try_join!(
            self.data.list_active_concepts(),
            self.data.list_categories()
        )?;

        let mut response = self.engine.generate(&ProposalInput {
            team: &proficiency,
            concepts: &concepts,
            categories: &categories,
            template: template.as_ref(),
            request,
        });

        info!(
            "Generated proposals for team {} ({}): {} suggested, {} optional, average score {}",
            team.id,
            team.name,
            response.metadata.suggested_count,
            response.metadata.optional_count,
            response.metadata.average_team_match_score.round_dp(2)
        );

        response.team = Some(team);
        Ok(response)
    }

    /// Proposals with default options, or `None` if the team does not exist
    ///
    /// # Errors
    ///
    /// Returns any error raised by the data source
    pub async fn proposals_for_team(
        &self,
        team_id: i64,
        season_id: i64,
        duration_days: Option<u32>,
    ) -> AppResult<Option<ProposalResponse>> {
        if self.data.get_team(team_id).await?.is_none() {
            return Ok(None);
        }

        let request = ProposalRequest {
            duration_days,
            ..ProposalRequest::new(team_id, season_id)
        };
        self.generate_proposals(&request).await.map(Some)
    }
}
