//! Search for images from the command line
//!
//! Run with: cargo run --example search_images -p imgsearch-core -- snowy owl
//! Set `RUST_LOG=imgsearch_core=debug` to see each request and strategy.

use imgsearch_core::{FaultPolicy, ImageSearcher, SearchConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let key = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let key = if key.is_empty() { "snowy owl".to_string() } else { key };

    let searcher = ImageSearcher::with_config(SearchConfig {
        fault_policy: FaultPolicy::SkipProvider,
        ..SearchConfig::default()
    })?;

    println!("Searching for '{}'...\n", key);

    match searcher.search(&key).await? {
        Some(url) => println!("Best match: {}\n", url),
        None => {
            println!("No image found!");
            return Ok(());
        }
    }

    let urls = searcher.search_all(&key).await?;
    println!("Found {} urls:\n", urls.len());

    for (i, url) in urls.iter().enumerate() {
        println!("{}. {}", i + 1, url);
    }

    Ok(())
}
