// ABOUTME: Proposal generation command for planner-cli
// ABOUTME: Loads a catalog snapshot and runs the proposal service for one team
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use sport_planner::{
    data::InMemoryCatalog,
    errors::AppResult,
    models::{ProposalRequest, ProposalResponse},
    services::ConceptProposalService,
};
use std::path::Path;
use tracing::info;

/// Request options collected from the command line
pub struct GenerateOptions {
    pub team_id: i64,
    pub season_id: i64,
    pub max_concepts: Option<usize>,
    pub section_focus: Option<String>,
    pub exclude_category_ids: Vec<i64>,
    pub include_concept_ids: Vec<i64>,
    pub planning_template_id: Option<i64>,
    pub level_offset: i32,
    pub skip_level_filter: bool,
    pub duration_days: Option<u32>,
}

impl From<GenerateOptions> for ProposalRequest {
    fn from(options: GenerateOptions) -> Self {
        Self {
            team_id: options.team_id,
            season_id: options.season_id,
            duration_days: options.duration_days,
            max_concepts: options.max_concepts,
            exclude_category_ids: options.exclude_category_ids,
            include_concept_ids: options.include_concept_ids,
            section_focus: options.section_focus,
            level_offset: options.level_offset,
            planning_template_id: options.planning_template_id,
            skip_level_filter: options.skip_level_filter,
        }
    }
}

/// Generate proposals from a snapshot file
pub async fn run(snapshot: &Path, options: GenerateOptions) -> AppResult<ProposalResponse> {
    info!("Loading catalog snapshot: {}", snapshot.display());
    let catalog = InMemoryCatalog::from_json_file(snapshot).await?;
    let service = ConceptProposalService::new(catalog);

    let request = ProposalRequest::from(options);
    service.generate_proposals(&request).await
}
