// Copyright 2026 Vignette Contributors
// SPDX-License-Identifier: Apache-2.0

//! Resolve loop: the per-topic state machine.
//!
//! Visits every configured topic once, in order. Cached topics are skipped
//! outright; the rest go through fetch then extract, and each success is
//! persisted to the cache file before the loop moves on. A fixed pacing
//! delay follows every topic that touched the network, success or failure.

use crate::cache::ImageCache;
use crate::cli::output;
use crate::config::Config;
use crate::extract;
use crate::fetch::PageFetcher;
use anyhow::Result;
use tracing::{debug, info, warn};

/// How a single topic ended the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicOutcome {
    /// Already in the cache; no request made.
    Cached,
    /// Fetched, extracted, and persisted.
    Resolved(String),
    /// The page could not be fetched; eligible for retry next run.
    FetchFailed(String),
    /// The page declared neither a thumbnail nor an og:image; eligible for
    /// retry next run.
    NoImage,
}

/// Aggregate counts for one resolve run.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct RunSummary {
    pub resolved: u32,
    pub skipped: u32,
    pub fetch_failed: u32,
    pub no_image: u32,
}

/// Run the resolve loop over `config.topic_ids`, threading `cache` through.
///
/// The cache is written to disk after every newly resolved topic, so partial
/// progress survives interruption at entry granularity. Keys already present
/// are never re-fetched or overwritten.
pub async fn run(config: &Config, cache: &mut ImageCache) -> Result<RunSummary> {
    let fetcher = PageFetcher::new(config);
    let mut summary = RunSummary::default();

    for &topic_id in &config.topic_ids {
        match resolve_topic(&fetcher, cache, topic_id).await? {
            TopicOutcome::Cached => {
                summary.skipped += 1;
                // No network touched, so no pacing delay either.
                continue;
            }
            TopicOutcome::Resolved(_) => summary.resolved += 1,
            TopicOutcome::FetchFailed(_) => summary.fetch_failed += 1,
            TopicOutcome::NoImage => summary.no_image += 1,
        }

        tokio::time::sleep(config.delay).await;
    }

    info!(
        "run complete: {} resolved, {} skipped, {} fetch failures, {} without an image",
        summary.resolved, summary.skipped, summary.fetch_failed, summary.no_image
    );
    Ok(summary)
}

/// Drive one topic through the state machine.
///
/// Only cache persistence failures abort the run; fetch and extraction
/// failures are reported and leave the topic unresolved for this run.
async fn resolve_topic(
    fetcher: &PageFetcher,
    cache: &mut ImageCache,
    topic_id: u32,
) -> Result<TopicOutcome> {
    if cache.contains(topic_id) {
        output::line(&format!("[--] {topic_id} already resolved, skipping"));
        debug!("topic {topic_id} cached, skipping");
        return Ok(TopicOutcome::Cached);
    }

    output::line(&format!("[..] fetching {}", fetcher.topic_url(topic_id)));

    let body = match fetcher.fetch(topic_id).await {
        Ok(body) => body,
        Err(err) => {
            output::line(&format!("[!!] {topic_id} fetch failed ({err})"));
            warn!("topic {topic_id}: {err}");
            return Ok(TopicOutcome::FetchFailed(err.to_string()));
        }
    };

    match extract::extract_image_url(&body) {
        Some(url) => {
            cache.insert(topic_id, url.clone());
            cache.save()?;
            output::line(&format!("[OK] {topic_id} -> {url}"));
            info!("topic {topic_id} resolved");
            Ok(TopicOutcome::Resolved(url))
        }
        None => {
            output::line(&format!("[??] {topic_id} no image found"));
            warn!("topic {topic_id}: page has neither thumbnail nor og:image");
            Ok(TopicOutcome::NoImage)
        }
    }
}
