// Copyright 2026 Vignette Contributors
// SPDX-License-Identifier: Apache-2.0

//! Run configuration: compiled-in defaults plus CLI overrides.

use std::path::PathBuf;
use std::time::Duration;

/// Topic ids resolved when no `--ids` override is given.
pub const DEFAULT_TOPIC_IDS: &[u32] = &[
    3365, 3359, 1721, 3132, 2368, 2178, 1546, 3257, 3975, 3256, 111, 2668, 2670, 3360, 1856, 3367,
    279, 3369, 3861, 3361,
];

/// Detail-page URL prefix; the topic id is appended verbatim.
pub const DEFAULT_BASE_URL: &str = "https://app.opinion.trade/detail?topicId=";

/// Cache file written to the working directory by default.
pub const DEFAULT_OUTPUT: &str = "market_images.json";

/// Pacing delay after every topic that touched the network.
pub const DEFAULT_DELAY_MS: u64 = 1_000;

/// Per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Fixed identifying User-Agent sent with every request.
pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; Vignette/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Effective configuration for one resolve run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ordered topic ids to visit, each exactly once per run.
    pub topic_ids: Vec<u32>,
    /// URL prefix the topic id is appended to.
    pub base_url: String,
    /// Path of the JSON cache file.
    pub output: PathBuf,
    /// Sleep inserted after every non-cached topic, success or failure.
    pub delay: Duration,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topic_ids: DEFAULT_TOPIC_IDS.to_vec(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Apply CLI overrides on top of the compiled-in defaults.
    pub fn with_overrides(
        ids: Option<Vec<u32>>,
        base_url: Option<String>,
        output: Option<PathBuf>,
        delay_ms: Option<u64>,
        timeout_ms: Option<u64>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(ids) = ids {
            config.topic_ids = ids;
        }
        if let Some(base_url) = base_url {
            config.base_url = base_url;
        }
        if let Some(output) = output {
            config.output = output;
        }
        if let Some(ms) = delay_ms {
            config.delay = Duration::from_millis(ms);
        }
        if let Some(ms) = timeout_ms {
            config.timeout = Duration::from_millis(ms);
        }
        config
    }
}
