// ABOUTME: Application service layer built on top of the recommendation engine
// ABOUTME: Services fetch snapshots from a data source and hand them to the pure engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

//! Application services
//!
//! Services are protocol-agnostic: the CLI, tests, and any future transport
//! call the same methods.

/// Concept proposal generation
pub mod proposals;

pub use proposals::ConceptProposalService;
