//! Pokedex Grid Example
//!
//! Fetches the Kanto roster and prints it as a grid of numbered entries.
//!
//! Set `POKEDEX_LIST_LIMIT` to fetch fewer entries and `RUST_LOG=debug` to
//! watch the requests.

use anyhow::{Context, Result};
use pokedex_client::{PokedexClient, capitalise_word};

const COLUMNS: usize = 4;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = PokedexClient::from_env();
    let list = client
        .fetch_pokemon_list()
        .await
        .context("Failed to load Pokemon")?;

    for row in list.chunks(COLUMNS) {
        let cells: Vec<String> = row
            .iter()
            .map(|p| {
                format!(
                    "#{:03} {:<12} {:<15}",
                    p.id,
                    capitalise_word(&p.name),
                    p.types.join("/")
                )
            })
            .collect();
        println!("{}", cells.join(" │ "));
    }

    println!("\nTotal: {} Pokemon", list.len());
    Ok(())
}
