//! `vignette status`: inspect the cache file.

use crate::cache::ImageCache;
use crate::cli::output;
use crate::config::DEFAULT_OUTPUT;
use anyhow::Result;
use std::path::PathBuf;

/// Print the resolved mapping and a count.
pub async fn run(out: Option<PathBuf>) -> Result<()> {
    let path = out.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let cache = ImageCache::load(&path)?;

    if output::is_json() {
        let entries: serde_json::Map<String, serde_json::Value> = cache
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        output::print_json(&serde_json::json!({
            "output": path,
            "resolved": cache.len(),
            "entries": entries,
        }));
        return Ok(());
    }

    println!("Vignette cache: {}", path.display());
    if cache.is_empty() {
        println!("  (empty: no topics resolved yet)");
    } else {
        for (topic_id, url) in cache.iter() {
            println!("  {topic_id}  {url}");
        }
    }
    println!();
    println!("{} topic(s) resolved.", cache.len());
    Ok(())
}
