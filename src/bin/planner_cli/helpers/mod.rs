// ABOUTME: Helper modules for planner-cli
// ABOUTME: Output formatting for proposals and level windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

pub mod display;
