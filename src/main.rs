// Copyright 2026 Vignette Contributors
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod cache;
mod cli;
mod config;
mod extract;
mod fetch;
mod runner;

#[derive(Parser)]
#[command(
    name = "vignette",
    about = "Vignette - resolve representative images for prediction-market topics",
    version,
    after_help = "Run 'vignette <command> --help' for details on each command."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch topic detail pages and cache their image URLs
    Resolve {
        /// Topic ids to resolve (comma-separated; defaults to the built-in list)
        #[arg(long, value_delimiter = ',')]
        ids: Option<Vec<u32>>,
        /// Detail-page URL prefix the topic id is appended to
        #[arg(long)]
        base_url: Option<String>,
        /// Cache file path
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pacing delay between topics, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Per-request timeout, in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Show the resolved topics in the cache file
    Status {
        /// Cache file path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Manage the cache file
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// Clear cached entries (all of them, or one topic id)
    Clear {
        /// Topic id to clear (omit to delete the whole file)
        topic_id: Option<u32>,
        /// Cache file path
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Export global flags via environment variables so all modules can check them
    if cli.json {
        std::env::set_var("VIGNETTE_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("VIGNETTE_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("VIGNETTE_VERBOSE", "1");
    }

    let default_directive = if cli.verbose {
        "vignette=debug"
    } else {
        "vignette=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_directive.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Resolve {
            ids,
            base_url,
            output,
            delay_ms,
            timeout_ms,
        } => cli::resolve_cmd::run(ids, base_url, output, delay_ms, timeout_ms).await,
        Commands::Status { output } => cli::status_cmd::run(output).await,
        Commands::Cache { action } => match action {
            CacheAction::Clear { topic_id, output } => {
                cli::cache_cmd::run_clear(topic_id, output).await
            }
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "vignette", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        } else {
            eprintln!("  Error: {e:#}");
        }
        std::process::exit(1);
    }

    result
}
