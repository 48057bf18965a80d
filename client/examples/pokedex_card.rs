//! Pokedex Card Example
//!
//! Prints the detail card of one creature, including its type matchups.
//!
//! Usage: cargo run --example pokedex_card -- [name]

use std::env;

use anyhow::{Context, Result};
use pokedex_client::{PokedexClient, capitalise_word, capitalise_words};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let name = env::args().nth(1).unwrap_or_else(|| "bulbasaur".to_string());
    let client = PokedexClient::from_env();

    let pokemon = client
        .fetch_pokemon_detail(&name.to_lowercase())
        .await
        .with_context(|| format!("Failed to load {}", name))?;

    println!("┌─ #{:03} {}  HP {}", pokemon.id, capitalise_word(&pokemon.name), pokemon.hp);
    println!("│  {}", pokemon.evolves_from_label());
    println!("│  {}", pokemon.subtitle());
    println!("│  Types: {}", pokemon.types.join(", "));
    println!("│");

    for mv in pokemon.featured_moves(2) {
        println!("│  • {} ({})", capitalise_words(&mv.name), mv.type_name);
        if !mv.description.is_empty() {
            println!("│    {}", mv.description);
        }
    }
    println!("│");
    println!("│  {}", pokemon.display_description());
    println!("│");

    let relations = &pokemon.damage_relations;
    print_matchups("Weak to", &relations.weak_to);
    print_matchups("Resistant to", &relations.resistant_to);
    print_matchups("Immune to", &relations.immune_to);
    println!("└─");

    Ok(())
}

fn print_matchups(label: &str, types: &[String]) {
    if types.is_empty() {
        return;
    }
    let names: Vec<String> = types.iter().map(|t| capitalise_word(t)).collect();
    println!("│  {}: {}", label, names.join(", "));
}
