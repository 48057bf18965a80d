//! Adapters from PokeAPI resources into Pokedex display records

use crate::resources::{ChainLink, MoveResource, PokemonResource, SpeciesResource};

/// Genus shown when the species has none in the requested language
pub const UNKNOWN_GENUS: &str = "Unknown";

/// One cell of the Pokedex grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonListItem {
    pub id: u32,
    pub name: String,
    pub image: Option<String>,
    /// Type names in slot order
    pub types: Vec<String>,
}

impl PokemonListItem {
    pub fn from_resource(pokemon: &PokemonResource) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            image: pokemon.official_artwork().map(str::to_string),
            types: pokemon.type_names(),
        }
    }
}

/// Header facts of a detail card
#[derive(Debug, Clone, PartialEq)]
pub struct BasicInfo {
    pub id: u32,
    pub name: String,
    pub image: Option<String>,
    pub types: Vec<String>,
    /// Height in centimetres
    pub height_cm: u32,
    /// Weight in kilograms
    pub weight_kg: f32,
    /// Base HP, 0 when the stat is missing
    pub hp: u32,
}

impl BasicInfo {
    pub fn from_resource(pokemon: &PokemonResource) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            image: pokemon.official_artwork().map(str::to_string),
            types: pokemon.type_names(),
            height_cm: pokemon.height * 10,
            weight_kg: pokemon.weight as f32 / 10.0,
            hp: pokemon.base_stat("hp").unwrap_or(0),
        }
    }
}

/// Genus and flavor text of a species
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesInfo {
    pub genus: String,
    pub description: String,
}

impl SpeciesInfo {
    /// Pick the genus for `language` and the first flavor text of `version`
    /// in that language.
    pub fn from_resource(species: &SpeciesResource, version: &str, language: &str) -> Self {
        let genus = species
            .genera
            .iter()
            .find(|g| g.language.name == language)
            .map(|g| g.genus.clone())
            .unwrap_or_else(|| UNKNOWN_GENUS.to_string());

        let description = species
            .flavor_text_entries
            .iter()
            .find(|f| f.version.name == version && f.language.name == language)
            .map(|f| flatten_flavor_text(&f.flavor_text))
            .unwrap_or_default();

        Self { genus, description }
    }
}

/// The species a creature evolves from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolvesFrom {
    pub name: String,
    pub image: Option<String>,
    /// 1-based position of the predecessor in its evolution line
    pub stage: u32,
}

/// A move as shown on a detail card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSummary {
    pub name: String,
    pub description: String,
    pub type_name: String,
}

impl MoveSummary {
    pub fn from_resource(mv: &MoveResource, version_group: &str, language: &str) -> Self {
        let description = mv
            .flavor_text_entries
            .iter()
            .find(|e| e.version_group.name == version_group && e.language.name == language)
            .map(|e| flatten_flavor_text(&e.flavor_text))
            .unwrap_or_default();

        Self {
            name: mv.name.clone(),
            description,
            type_name: mv.r#type.name.clone(),
        }
    }
}

/// Find the 1-based stage of `target` following the first branch of `chain`.
///
/// Branching lines (Eevee) only follow `evolves_to[0]`. If `target` never
/// shows up, the stage of the last link visited is returned.
pub fn find_evolution_stage(chain: &ChainLink, target: &str) -> u32 {
    let mut stage = 1;
    let mut current = chain;

    loop {
        if current.species.name == target {
            return stage;
        }
        match current.evolves_to.first() {
            Some(next) => {
                current = next;
                stage += 1;
            }
            None => return stage,
        }
    }
}

// Upstream flavor text is hard-wrapped with newlines and form feeds
fn flatten_flavor_text(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\u{c}' { ' ' } else { c })
        .collect()
}
