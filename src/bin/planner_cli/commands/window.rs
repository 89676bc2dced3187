// ABOUTME: Level window inspection command for planner-cli
// ABOUTME: Shows the expected stage and inclusive window for a team profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

use rust_decimal::Decimal;
use sport_planner::constants::development_levels::DEFAULT_LEVEL;
use sport_planner::intelligence::expected_level::level_for_age;
use sport_planner::intelligence::LevelWindow;

/// Computed window plus the inputs that produced it
pub struct WindowReport {
    pub stage: i32,
    pub technical: i32,
    pub tactical: i32,
    pub offset: i32,
    pub adjustment: Decimal,
    pub window: LevelWindow,
}

/// Resolve the stage and compute the window
pub fn run(
    stage: Option<i32>,
    min_age: Option<i32>,
    technical: i32,
    tactical: i32,
    offset: i32,
) -> WindowReport {
    let stage = stage.unwrap_or_else(|| min_age.map_or(DEFAULT_LEVEL, level_for_age));
    WindowReport {
        stage,
        technical,
        tactical,
        offset,
        adjustment: LevelWindow::adjustment(technical, tactical, offset),
        window: LevelWindow::calculate(stage, technical, tactical, offset),
    }
}
