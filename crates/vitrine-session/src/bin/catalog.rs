//! # Catalog Query CLI
//!
//! Runs one query against the reference catalog and prints the result.
//!
//! ## Usage
//! ```bash
//! # Whole catalog in catalog order
//! cargo run -p vitrine-session --bin catalog
//!
//! # Electronics under R$ 1000, cheapest first
//! cargo run -p vitrine-session --bin catalog -- \
//!     --category Eletrônicos --max-price 1000 --sort priceAsc
//!
//! # Search, JSON output
//! cargo run -p vitrine-session --bin catalog -- --search pro --json
//! ```
//!
//! Defaults for the price ceiling and the generator come from `VITRINE_*`
//! environment variables (see `SessionConfig::from_env`).

use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use vitrine_core::{Money, PriceRange, Rating, SortOption, CARD_FEATURE_COUNT};
use vitrine_session::fixtures::reference_catalog;
use vitrine_session::{init_tracing, CatalogSession, SessionConfig, SessionError};

#[derive(Debug, Parser)]
#[command(name = "catalog", about = "Query the Vitrine reference catalog")]
struct Args {
    /// Exact category (case-sensitive)
    #[arg(long, default_value = "")]
    category: String,

    /// Exact brand (case-sensitive)
    #[arg(long, default_value = "")]
    brand: String,

    /// Minimum price in reais, e.g. 49.90
    #[arg(long, value_parser = parse_money)]
    min_price: Option<Money>,

    /// Maximum price in reais; defaults to the configured ceiling
    #[arg(long, value_parser = parse_money)]
    max_price: Option<Money>,

    /// Minimum rating, 0.0 - 5.0
    #[arg(long, default_value_t = 0.0)]
    min_rating: f64,

    /// Sort option: none, priceAsc, priceDesc, rating
    #[arg(long, default_value = "none")]
    sort: SortOption,

    /// Case-insensitive name search
    #[arg(long, default_value = "")]
    search: String,

    /// Number of generic products to generate (overrides VITRINE_SEED_COUNT)
    #[arg(long)]
    count: Option<usize>,

    /// Generator seed (overrides VITRINE_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn parse_money(input: &str) -> Result<Money, String> {
    Money::parse_decimal(input).ok_or_else(|| format!("invalid amount: {input}"))
}

fn main() -> ExitCode {
    init_tracing();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "catalog query failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SessionError> {
    let mut config = SessionConfig::from_env()?;
    if let Some(count) = args.count {
        config.seed_count = count;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let catalog = reference_catalog(config.seed_count, config.seed)?;
    let mut session = CatalogSession::from_config(catalog, &config);

    let mut filters = config.default_filters();
    filters.category = args.category;
    filters.brand = args.brand;
    filters.price_range = PriceRange::new(
        args.min_price.unwrap_or(filters.price_range.min),
        args.max_price.unwrap_or(filters.price_range.max),
    );
    filters.min_rating = Rating::at_least(args.min_rating);

    session.set_filters(filters);
    session.set_sort(args.sort);
    session.set_search(args.search);

    if args.json {
        let body = serde_json::json!({
            "summary": session.summary(),
            "products": session.displayed(),
        });
        println!("{body:#}");
        return Ok(());
    }

    println!("Produtos: {}", session.result_count());
    for product in session.displayed() {
        let mut line = format!(
            "{:>4}  {:<24} {:<12} {:<13} {:>12}  ★ {}",
            product.id.0,
            product.name,
            product.category,
            product.brand,
            config.format_currency(product.price),
            product.rating,
        );
        if product.discount_percent() > 0 {
            line.push_str(&format!(
                "  (de {}, -{}%)",
                config.format_currency(product.original_price),
                product.discount_percent()
            ));
        }
        let features = product.headline_features(CARD_FEATURE_COUNT).join(", ");
        if !features.is_empty() {
            line.push_str(&format!("  [{features}]"));
        }
        println!("{line}");
    }

    Ok(())
}
