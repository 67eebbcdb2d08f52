mod allocator;
mod analyzer;
mod colors;
mod config;
mod matcher;
mod model;
mod parser;
mod pipeline;
mod tables;

use allocator::ArticleAllocator;
use config::load_config;
use parser::ListingParser;
use tracing::{error, info};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let parser = ListingParser::new();

    info!("Reading catalog from {}...", config.catalog_file);
    let catalog = match tables::read_catalog(&config.catalog_file, &config.regions) {
        Ok(items) => items,
        Err(e) => {
            error!("Catalog read error: {}", e);
            return;
        }
    };
    info!("Loaded {} catalog items", catalog.len());

    info!("Reading supplier listings from {}...", config.supplier_file);
    let offers = match tables::read_offers(&config.supplier_file, &parser) {
        Ok(offers) => offers,
        Err(e) => {
            error!("Supplier read error: {}", e);
            return;
        }
    };
    info!("Parsed {} supplier offers", offers.len());

    let mut allocator = ArticleAllocator::new();
    let now = chrono::Local::now().naive_local();
    let results = pipeline::reconcile(
        &catalog,
        &offers,
        config.regions.len(),
        &mut allocator,
        now,
    );

    if let Err(e) = tables::write_results(&config.output_file, &results, &config.regions) {
        error!("Result write error: {}", e);
        return;
    }
    info!(
        "Reconciliation finished: {} rows written to {}",
        results.len(),
        config.output_file
    );
}
