//! `vignette cache clear`: drop the whole cache file or a single topic.

use crate::cache::ImageCache;
use crate::cli::output;
use crate::config::DEFAULT_OUTPUT;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Clear cached entries.
///
/// With a topic id, remove just that entry and rewrite the file; without,
/// delete the file outright. This is the explicit escape hatch for
/// re-resolving a topic, since a resolve run never overwrites present keys.
pub async fn run_clear(topic_id: Option<u32>, out: Option<PathBuf>) -> Result<()> {
    let path = out.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    match topic_id {
        Some(id) => {
            let mut cache = ImageCache::load(&path)?;
            if cache.remove(id) {
                cache.save()?;
                output::line(&format!("removed topic {id} from {}", path.display()));
            } else {
                output::line(&format!("topic {id} not present in {}", path.display()));
            }
        }
        None => {
            if path.exists() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("failed to remove cache file: {}", path.display()))?;
                output::line(&format!("removed {}", path.display()));
            } else {
                output::line(&format!("nothing to clear: {} does not exist", path.display()));
            }
        }
    }

    Ok(())
}
