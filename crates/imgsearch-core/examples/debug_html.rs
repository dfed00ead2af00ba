//! Debug script to inspect the embedded metadata on a Bing results page
//!
//! Run with: cargo run --example debug_html -p imgsearch-core

use imgsearch_core::{Document, MetadataStrategy, SearchClient, UrlProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = SearchClient::new()?;
    let url = UrlProvider::bing().provide("snowy owl");

    println!("Fetching {}...\n", url);

    let page = client.fetch(&url).await?;

    // Save HTML to file for inspection
    std::fs::write("debug_search.html", &page.body)?;
    println!("HTML saved to debug_search.html (final URL: {})", page.url);

    let document = Document::parse(&page.body, &page.url);
    let descriptors = MetadataStrategy::default().descriptors(&document)?;

    println!("\n=== {} result tiles ===\n", descriptors.len());
    for metadata in descriptors.iter().take(10) {
        println!("{}", metadata.title.as_deref().unwrap_or("(untitled)"));
        println!("   thumbnail: {}", metadata.thumbnail_url);
        println!("   master:    {}", metadata.master_url);
        if let Some(ref page_url) = metadata.page_url {
            println!("   page:      {}", page_url);
        }
    }

    Ok(())
}
