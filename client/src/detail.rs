//! Assembled detail card data

use pokedex_api::{
    BasicInfo, EvolvesFrom, MoveSummary, SpeciesInfo, capitalise_word, normalize_description,
};
use pokedex_matchup::DamageRelationNames;

use crate::sample::random_items;

/// Everything a detail card shows for one creature
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub image: Option<String>,
    pub types: Vec<String>,
    pub height_cm: u32,
    pub weight_kg: f32,
    pub hp: u32,
    pub genus: String,
    pub description: String,
    /// `None` for basic (unevolved) creatures
    pub evolves_from: Option<EvolvesFrom>,
    pub moves: Vec<MoveSummary>,
    pub damage_relations: DamageRelationNames,
}

impl PokemonDetail {
    pub fn new(
        basic: BasicInfo,
        species: SpeciesInfo,
        evolves_from: Option<EvolvesFrom>,
        moves: Vec<MoveSummary>,
        damage_relations: DamageRelationNames,
    ) -> Self {
        Self {
            id: basic.id,
            name: basic.name,
            image: basic.image,
            types: basic.types,
            height_cm: basic.height_cm,
            weight_kg: basic.weight_kg,
            hp: basic.hp,
            genus: species.genus,
            description: species.description,
            evolves_from,
            moves,
            damage_relations,
        }
    }

    /// First declared type, if any
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    pub fn evolves_from_label(&self) -> String {
        match &self.evolves_from {
            Some(from) => format!("Evolves from {}", capitalise_word(&from.name)),
            None => "Basic Pokémon".to_string(),
        }
    }

    /// Centimetres up to 99, metres above
    pub fn height_label(&self) -> String {
        if self.height_cm > 99 {
            format!("{}m", self.height_cm as f32 / 100.0)
        } else {
            format!("{}cm", self.height_cm)
        }
    }

    pub fn subtitle(&self) -> String {
        format!(
            "{}. Height: {}, Weight: {}kg.",
            capitalise_word(&self.genus),
            self.height_label(),
            self.weight_kg
        )
    }

    /// Flavor text with old-game capitalisation cleaned up
    pub fn display_description(&self) -> String {
        normalize_description(&self.description)
    }

    /// A random handful of the fetched moves
    pub fn featured_moves(&self, count: usize) -> Vec<MoveSummary> {
        random_items(&self.moves, count)
    }
}
