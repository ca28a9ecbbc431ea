//! Seeds the configured database.
//!
//! Without flags the tables are cleared and refilled with fixed plus
//! generated rows; `--sample` only adds the three fixed restaurants, pizzas
//! and prices.

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use pizza_restaurants::config::AppConfig;
use pizza_restaurants::persistence::SqliteStore;
use pizza_restaurants::seed::{self, SeedOptions};
use pizza_restaurants::telemetry;

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Load restaurants, pizzas and prices into the database")]
struct Cli {
    /// Add the three sample rows of each table without clearing anything.
    #[arg(long)]
    sample: bool,

    /// Seed for the random generator, for reproducible data.
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Restaurants generated beyond the fixed three.
    #[arg(long, default_value_t = SeedOptions::default().generated_restaurants)]
    restaurants: usize,

    /// Random price entries drawn before duplicates are dropped.
    #[arg(long, default_value_t = SeedOptions::default().random_associations)]
    associations: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env().map_err(|err| anyhow::anyhow!("{err}"))?;
    telemetry::init_tracing(config.log_format);

    let store = SqliteStore::connect(&config).await?;
    store.migrate().await?;

    let counts = if cli.sample {
        seed::sample_data(&store).await?
    } else {
        let mut rng = match cli.rng_seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::from_entropy(),
        };
        let options = SeedOptions {
            generated_restaurants: cli.restaurants,
            random_associations: cli.associations,
        };
        seed::setup_database(&store, options, &mut rng).await?
    };

    tracing::info!(
        url = %config.database_url,
        restaurants = counts.restaurants,
        pizzas = counts.pizzas,
        restaurant_pizzas = counts.restaurant_pizzas,
        "database seeded"
    );
    Ok(())
}
