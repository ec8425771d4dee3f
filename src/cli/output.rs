// Copyright 2026 Vignette Contributors
// SPDX-License-Identifier: Apache-2.0

//! Global output flags, shared via environment variables.
//!
//! `main` exports the parsed global flags as `VIGNETTE_*` env vars so any
//! module can consult them without threading a flags struct everywhere.

/// Whether `--quiet` was given.
pub fn is_quiet() -> bool {
    std::env::var("VIGNETTE_QUIET").is_ok()
}

/// Whether `--json` was given.
pub fn is_json() -> bool {
    std::env::var("VIGNETTE_JSON").is_ok()
}

/// Print one human-readable progress line, unless suppressed.
///
/// JSON mode suppresses progress lines as well; machine consumers only want
/// the final document.
pub fn line(msg: &str) {
    if !is_quiet() && !is_json() {
        println!("  {msg}");
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("  Error: failed to encode JSON output: {e}"),
    }
}
