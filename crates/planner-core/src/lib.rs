// ABOUTME: Core types and constants for the Sport Planner recommendation platform
// ABOUTME: Foundation crate with error handling, domain models, and proposal DTOs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

#![deny(unsafe_code)]

//! # Planner Core
//!
//! Foundation crate providing shared types and constants for the Sport Planner
//! concept recommendation platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Curriculum bounds and display labels shared across crates
//! - **models**: Concepts, category nodes, teams, templates, and proposal DTOs

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Concept, CategoryNode, TeamProficiency, proposals)
pub mod models;
