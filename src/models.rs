// ABOUTME: Core data models re-exported from planner-core
// ABOUTME: Concepts, categories, teams, templates, and proposal request/response types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

//! # Data Models
//!
//! - `Concept` / `CategoryNode`: the training catalog
//! - `Team` / `TeamSeason` / `TeamProficiency`: who the proposal is for
//! - `PlanningTemplate`: optional stage override
//! - `ProposalRequest` / `ProposalResponse`: the service contract

pub use planner_core::models::*;
