// ABOUTME: Main library entry point for the Sport Planner recommendation service
// ABOUTME: Wires data sources, logging, and the proposal service around the engine crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy across the workspace
#![deny(unsafe_code)]

//! # Sport Planner
//!
//! Generates training concept proposals for a team. Given a team's season
//! snapshot (technical and tactical levels, age category, competitive level)
//! and a catalog of concepts, it suggests the concepts that fit the team now
//! and lists optional ones that are within reach.
//!
//! ## Architecture
//!
//! - **planner-core**: Error types, domain models, and shared constants
//! - **planner-intelligence**: The pure, synchronous scoring engine
//! - **data**: Async data-source seam and an in-memory JSON-backed catalog
//! - **services**: `ConceptProposalService`, which loads a snapshot and runs the engine
//! - **logging**: `tracing-subscriber` setup shared by binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sport_planner::data::InMemoryCatalog;
//! use sport_planner::errors::AppResult;
//! use sport_planner::models::ProposalRequest;
//! use sport_planner::services::ConceptProposalService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let catalog = InMemoryCatalog::from_json_file("catalog.json").await?;
//!     let service = ConceptProposalService::new(catalog);
//!
//!     let response = service.generate_proposals(&ProposalRequest::new(1, 2025)).await?;
//!     println!("{} concepts suggested", response.metadata.suggested_count);
//!
//!     Ok(())
//! }
//! ```

/// Application constants (service identity, environment names)
pub mod constants;

/// Async data sources feeding the engine
pub mod data;

/// Unified error handling re-exported from planner-core
pub mod errors;

/// Recommendation engine re-exported from planner-intelligence
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// Domain models re-exported from planner-core
pub mod models;

/// Application services
pub mod services;
