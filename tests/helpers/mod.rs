// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports program/tracking fixtures and in-memory store doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod fixtures;
pub mod stores;
