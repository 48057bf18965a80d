//! Async PokeAPI client for the Pokedex.
//!
//! Fetches the grid roster and per-creature detail, memoizes type damage
//! relations and moves, and hands type buckets to `pokedex-matchup` in the
//! creature's type order.

mod cache;
mod config;
mod detail;
mod error;
mod sample;
mod source;

#[cfg(test)]
mod testing;

use futures_util::future::{join_all, try_join_all};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub use pokedex_api::{
    AdapterError, BasicInfo, EvolutionChainResource, EvolvesFrom, MoveResource, MoveSummary,
    PokemonListItem, PokemonMoveEntry, PokemonResource, ResourceList, SpeciesInfo,
    SpeciesResource, TypeResource, capitalise_word, capitalise_words, find_evolution_stage,
    normalize_description,
};
pub use pokedex_matchup::{
    DamageMultiplierResult, DamageRelationBucket, DamageRelationNames, calculate_damage_multipliers,
    calculate_damage_relations,
};

pub use cache::Cache;
pub use config::{ClientConfig, DEFAULT_MOVE_SAMPLE, KANTO_DEX_SIZE, POKEAPI_URL};
pub use detail::PokemonDetail;
pub use error::{FetchError, Result};
pub use sample::{random_items, random_items_with};
pub use source::{HttpSource, JsonSource};

/// Pokedex client over a [`JsonSource`]
pub struct PokedexClient<S = HttpSource> {
    config: ClientConfig,
    source: S,
    type_cache: Cache<DamageRelationBucket>,
    move_cache: Cache<MoveSummary>,
}

impl PokedexClient<HttpSource> {
    /// Client talking to the API named in `config`
    pub fn new(config: ClientConfig) -> Self {
        Self::with_source(config, HttpSource::new())
    }

    /// Client configured from `POKEDEX_*` environment variables
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }
}

impl<S: JsonSource> PokedexClient<S> {
    pub fn with_source(config: ClientConfig, source: S) -> Self {
        Self {
            config,
            source,
            type_cache: Cache::new(),
            move_cache: Cache::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Cached damage relations, keyed by type name
    pub fn type_cache(&self) -> &Cache<DamageRelationBucket> {
        &self.type_cache
    }

    /// Cached moves, keyed by move name
    pub fn move_cache(&self) -> &Cache<MoveSummary> {
        &self.move_cache
    }

    pub fn clear_caches(&self) {
        self.type_cache.clear();
        self.move_cache.clear();
    }

    async fn get_resource<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let value = self.source.get(url).await?;
        serde_json::from_value(value).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch the roster and every entry's detail concurrently.
    ///
    /// Items come back in roster order. One failed entry fails the whole list.
    pub async fn fetch_pokemon_list(&self) -> Result<Vec<PokemonListItem>> {
        let list: ResourceList = self.get_resource(&self.config.list_url()).await?;
        debug!(count = list.results.len(), "fetched roster");

        let items = list.results.iter().map(|entry| async move {
            let pokemon = self.fetch_pokemon(&entry.name).await?;
            Ok::<_, FetchError>(PokemonListItem::from_resource(&pokemon))
        });
        try_join_all(items).await
    }

    pub async fn fetch_pokemon(&self, name: &str) -> Result<PokemonResource> {
        self.get_resource(&self.config.pokemon_url(name)).await
    }

    pub async fn fetch_species(&self, url: &str) -> Result<SpeciesResource> {
        self.get_resource(url).await
    }

    pub async fn fetch_evolution_chain(&self, url: &str) -> Result<EvolutionChainResource> {
        self.get_resource(url).await
    }

    pub async fn fetch_move_resource(&self, url: &str) -> Result<MoveResource> {
        self.get_resource(url).await
    }

    /// Damage relations of one type, served from cache after the first fetch
    pub async fn fetch_damage_relations_for_type(
        &self,
        type_name: &str,
    ) -> Result<DamageRelationBucket> {
        if let Some(bucket) = self.type_cache.get(type_name) {
            debug!(type_name, "type cache hit");
            return Ok(bucket);
        }

        debug!(type_name, "fetching type");
        let resource: TypeResource = self.get_resource(&self.config.type_url(type_name)).await?;
        let bucket = DamageRelationBucket::from_api(&resource);
        self.type_cache.insert(type_name, bucket.clone());
        Ok(bucket)
    }

    /// Damage relations of several types, fetched concurrently, in input order
    pub async fn fetch_damage_relations_for_types(
        &self,
        type_names: &[String],
    ) -> Result<Vec<DamageRelationBucket>> {
        try_join_all(
            type_names
                .iter()
                .map(|name| self.fetch_damage_relations_for_type(name)),
        )
        .await
    }

    /// Net multipliers for a creature with `type_names`, in declaration order
    pub async fn fetch_damage_multipliers(
        &self,
        type_names: &[String],
    ) -> Result<DamageMultiplierResult> {
        let buckets = self.fetch_damage_relations_for_types(type_names).await?;
        Ok(calculate_damage_multipliers(&buckets))
    }

    /// Weak/resistant/immune names for a creature with `type_names`
    pub async fn fetch_damage_relations(&self, type_names: &[String]) -> Result<DamageRelationNames> {
        let buckets = self.fetch_damage_relations_for_types(type_names).await?;
        Ok(calculate_damage_relations(&buckets))
    }

    /// The species this one evolves from, or `None` for basic creatures
    pub async fn fetch_evolution_data(
        &self,
        species: &SpeciesResource,
    ) -> Result<Option<EvolvesFrom>> {
        let Some(from) = &species.evolves_from_species else {
            return Ok(None);
        };
        let chain_url = species
            .evolution_chain
            .as_ref()
            .map(|c| c.url.as_str())
            .ok_or_else(|| AdapterError::MissingField("evolution_chain".to_string()))?;

        let (predecessor, chain) = tokio::try_join!(
            self.fetch_pokemon(&from.name),
            self.fetch_evolution_chain(chain_url),
        )?;

        Ok(Some(EvolvesFrom {
            name: from.name.clone(),
            image: predecessor.official_artwork().map(str::to_string),
            stage: find_evolution_stage(&chain.chain, &from.name),
        }))
    }

    /// One move, served from cache after the first fetch
    pub async fn fetch_move(&self, name: &str, url: &str) -> Result<MoveSummary> {
        if let Some(summary) = self.move_cache.get(name) {
            debug!(move_name = name, "move cache hit");
            return Ok(summary);
        }

        debug!(move_name = name, "fetching move");
        let resource = self.fetch_move_resource(url).await?;
        let summary = MoveSummary::from_resource(
            &resource,
            &self.config.move_version_group,
            &self.config.language,
        );
        self.move_cache.insert(name, summary.clone());
        Ok(summary)
    }

    /// Sample up to `count` moves and fetch them concurrently.
    ///
    /// Moves that fail to load are logged and left out.
    pub async fn fetch_moves(&self, entries: &[PokemonMoveEntry], count: usize) -> Vec<MoveSummary> {
        let sampled = random_items(entries, count);
        let results = join_all(
            sampled
                .iter()
                .map(|entry| self.fetch_move(&entry.r#move.name, &entry.r#move.url)),
        )
        .await;

        sampled
            .iter()
            .zip(results)
            .filter_map(|(entry, result)| match result {
                Ok(summary) => Some(summary),
                Err(e) => {
                    warn!(move_name = %entry.r#move.name, error = %e, "skipping move");
                    None
                }
            })
            .collect()
    }

    /// Fetch and assemble everything the detail card shows
    pub async fn fetch_pokemon_detail(&self, name: &str) -> Result<PokemonDetail> {
        let pokemon = self.fetch_pokemon(name).await?;
        let basic = BasicInfo::from_resource(&pokemon);

        let species = self.fetch_species(&pokemon.species.url).await?;
        let species_info = SpeciesInfo::from_resource(
            &species,
            &self.config.flavor_version,
            &self.config.language,
        );

        let (evolves_from, moves, damage_relations) = tokio::join!(
            self.fetch_evolution_data(&species),
            self.fetch_moves(&pokemon.moves, self.config.move_sample_size),
            self.fetch_damage_relations(&basic.types),
        );

        Ok(PokemonDetail::new(
            basic,
            species_info,
            evolves_from?,
            moves,
            damage_relations?,
        ))
    }
}
