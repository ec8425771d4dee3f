// Copyright 2026 Vignette Contributors
// SPDX-License-Identifier: Apache-2.0

//! Vignette library: core modules exposed for integration testing.

pub mod cache;
pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod runner;
