// ABOUTME: Output formatting helpers for planner-cli
// ABOUTME: Prints proposals as JSON or as a grouped listing, and level window reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use crate::commands::window::WindowReport;
use sport_planner::errors::{AppError, AppResult, ErrorResponse};
use sport_planner::models::{ProposalGroup, ProposalResponse};

/// Print a failed command as an error body on stderr
pub fn print_error(error: AppError) {
    let fallback = error.to_string();
    match serde_json::to_string_pretty(&ErrorResponse::from(error)) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{fallback}"),
    }
}

/// Print the full response as pretty JSON on stdout
pub fn print_json(response: &ProposalResponse) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

fn print_groups(title: &str, groups: &[ProposalGroup]) {
    println!("\n{title}");
    println!("{}", "=".repeat(60));
    if groups.is_empty() {
        println!("   (none)");
        return;
    }
    for group in groups {
        println!("[{}] {}", group.section, group.category_name);
        for scored in &group.concepts {
            println!(
                "   {:>5}  {:<32} {:<12} {:<14} {}",
                scored.score.round_dp(2).to_string(),
                scored.concept.name,
                scored.priority.as_str(),
                scored.tag.as_str(),
                scored.score_reason
            );
        }
    }
}

/// Print a grouped, human-readable listing
pub fn print_summary(response: &ProposalResponse) {
    let meta = &response.metadata;
    if let Some(team) = &response.team {
        println!("Team: {} (#{})", team.name, team.id);
    }
    println!(
        "Stage {} | window {}..={} | {} available, {} in window",
        meta.expected_development_level,
        meta.min_level_window,
        meta.max_level_window,
        meta.total_available_concepts,
        meta.filtered_concepts_count
    );
    println!(
        "{} suggested, {} optional, average match {}",
        meta.suggested_count,
        meta.optional_count,
        meta.average_team_match_score.round_dp(2)
    );

    print_groups("SUGGESTED", &response.suggested_groups);
    print_groups("OPTIONAL", &response.optional_groups);
}

/// Print a level window report
pub fn print_window(report: &WindowReport) {
    println!("Expected stage: {}", report.stage);
    println!(
        "Team levels: technical {}, tactical {} (offset {})",
        report.technical, report.tactical, report.offset
    );
    println!("Adjustment: {}", report.adjustment.round_dp(2));
    println!("Window: {}..={}", report.window.min, report.window.max);
}
