//! PokeAPI v2 response shapes
//!
//! Only the fields the Pokedex reads are modelled. Everything else in the
//! upstream JSON is ignored during deserialization.


use serde::Deserialize;

/// A `{ name, url }` reference to another resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A `{ url }` reference without a name (evolution chains)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UrlResource {
    pub url: String,
}

/// Paginated listing returned by `/pokemon?limit=N`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// `/pokemon/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonResource {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    /// Height in decimetres
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStatEntry>,
    #[serde(default)]
    pub moves: Vec<PokemonMoveEntry>,
    pub species: NamedResource,
}

impl PokemonResource {
    /// Official artwork URL, if upstream has one
    pub fn official_artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .as_deref()
    }

    /// Type names in slot order
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.into_iter().map(|s| s.r#type.name.clone()).collect()
    }

    /// Base value of a stat by name (e.g. "hp")
    pub fn base_stat(&self, stat: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name == stat)
            .map(|s| s.base_stat)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(default)]
    pub slot: u8,
    pub r#type: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonStatEntry {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonMoveEntry {
    pub r#move: NamedResource,
}

/// `/pokemon-species/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeciesResource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genera: Vec<Genus>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub evolves_from_species: Option<NamedResource>,
    pub evolution_chain: Option<UrlResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version: NamedResource,
}

/// `/evolution-chain/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvolutionChainResource {
    #[serde(default)]
    pub id: u32,
    pub chain: ChainLink,
}

/// One node of an evolution tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// `/move/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveResource {
    pub name: String,
    pub r#type: NamedResource,
    #[serde(default)]
    pub flavor_text_entries: Vec<MoveFlavorText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveFlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
    pub version_group: NamedResource,
}

/// `/type/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeResource {
    pub name: String,
    pub damage_relations: DamageRelations,
}

/// Raw damage relations for a single defending/attacking type.
///
/// The `*_from` lists describe how this type takes damage; the `*_to`
/// lists describe how it deals damage. The `*_from` lists feed matchup
/// aggregation and must be present in the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DamageRelations {
    pub no_damage_from: Vec<NamedResource>,
    pub half_damage_from: Vec<NamedResource>,
    pub double_damage_from: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
}

/// Names of a resource list, in response order
pub fn resource_names(resources: &[NamedResource]) -> Vec<String> {
    resources.iter().map(|r| r.name.clone()).collect()
}
