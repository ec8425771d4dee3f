// Copyright 2026 Vignette Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI command implementations.

pub mod cache_cmd;
pub mod output;
pub mod resolve_cmd;
pub mod status_cmd;
