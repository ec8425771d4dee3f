// Copyright 2026 Vignette Contributors
// SPDX-License-Identifier: Apache-2.0

//! Image cache: the persisted topic id to image URL mapping.
//!
//! The cache file is both the output artifact and the resumption
//! checkpoint: a single JSON object of string-encoded topic ids to URLs,
//! fully rewritten after every newly resolved topic. Once a key is present
//! a resolve run never overwrites or re-fetches it.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed topic to image URL cache.
#[derive(Debug)]
pub struct ImageCache {
    /// Path of the JSON cache file.
    path: PathBuf,
    /// In-memory mapping, keyed by the decimal string form of the topic id.
    entries: BTreeMap<String, String>,
}

impl ImageCache {
    /// Load the cache from `path`.
    ///
    /// A missing file is an empty cache. A file that exists but does not
    /// parse is a hard error: treating it as empty would re-fetch and
    /// overwrite every previously resolved topic.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read cache file: {}", path.display()))?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw).with_context(|| {
            format!(
                "cache file {} exists but is not a valid JSON object; \
                 move it aside or run `vignette cache clear`",
                path.display()
            )
        })?;

        tracing::debug!(
            "loaded {} cached entries from {}",
            entries.len(),
            path.display()
        );
        Ok(Self { path, entries })
    }

    /// Whether `topic_id` has already been resolved.
    pub fn contains(&self, topic_id: u32) -> bool {
        self.entries.contains_key(&topic_id.to_string())
    }

    /// Resolved image URL for `topic_id`, if present.
    pub fn get(&self, topic_id: u32) -> Option<&str> {
        self.entries.get(&topic_id.to_string()).map(String::as_str)
    }

    /// Record a newly resolved topic under its decimal string key.
    pub fn insert(&mut self, topic_id: u32, url: impl Into<String>) {
        self.entries.insert(topic_id.to_string(), url.into());
    }

    /// Remove one entry. Returns whether it was present.
    pub fn remove(&mut self, topic_id: u32) -> bool {
        self.entries.remove(&topic_id.to_string()).is_some()
    }

    /// Write the full mapping back to disk, pretty-printed with 2-space
    /// indentation.
    ///
    /// Called after every insertion so an interrupted run keeps everything
    /// resolved so far.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries).context("failed to serialize cache")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write cache file: {}", self.path.display()))?;
        Ok(())
    }

    /// Number of resolved topics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cache file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterate over (topic id, url) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
