//! `vignette resolve`: fetch topic detail pages and cache their image URLs.

use crate::cache::ImageCache;
use crate::cli::output;
use crate::config::Config;
use crate::runner;
use anyhow::Result;
use std::path::PathBuf;

/// Run the resolve loop with CLI overrides applied to the defaults.
pub async fn run(
    ids: Option<Vec<u32>>,
    base_url: Option<String>,
    out: Option<PathBuf>,
    delay_ms: Option<u64>,
    timeout_ms: Option<u64>,
) -> Result<()> {
    let config = Config::with_overrides(ids, base_url, out, delay_ms, timeout_ms);

    let mut cache = ImageCache::load(&config.output)?;
    let summary = runner::run(&config, &mut cache).await?;

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "output": config.output,
            "summary": summary,
        }));
    } else if !output::is_quiet() {
        println!();
        println!(
            "Done. {} resolved, {} skipped, {} failed, {} without an image.",
            summary.resolved, summary.skipped, summary.fetch_failed, summary.no_image
        );
        println!("Images saved to {}", config.output.display());
    }

    Ok(())
}
