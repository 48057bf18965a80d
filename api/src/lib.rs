//! PokeAPI resource types and adapters.
//!
//! `resources` mirrors the JSON the PokeAPI v2 endpoints return, `transform`
//! turns those responses into the records a Pokedex view displays, and `text`
//! holds the small string helpers used on names and flavor text.

use thiserror::Error;

pub mod resources;
pub mod text;
pub mod transform;

pub use resources::{
    ChainLink, DamageRelations, EvolutionChainResource, FlavorTextEntry, Genus, MoveFlavorText,
    MoveResource, NamedResource, PokemonMoveEntry, PokemonResource, PokemonStatEntry,
    PokemonTypeSlot, ResourceList, SpeciesResource, Sprites, TypeResource, UrlResource,
    resource_names,
};
pub use text::{capitalise_word, capitalise_words, normalize_description};
pub use transform::{
    BasicInfo, EvolvesFrom, MoveSummary, PokemonListItem, SpeciesInfo, UNKNOWN_GENUS,
    find_evolution_stage,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}
