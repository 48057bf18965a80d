//! Client configuration

use std::env;

/// Public PokeAPI v2 root
pub const POKEAPI_URL: &str = "https://pokeapi.co/api/v2";

/// Size of the original Kanto Pokedex
pub const KANTO_DEX_SIZE: u32 = 151;

/// Moves fetched per detail view
pub const DEFAULT_MOVE_SAMPLE: usize = 20;

/// Settings for [`PokedexClient`](crate::PokedexClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without trailing slash
    pub base_url: String,
    /// Number of entries requested for the grid
    pub list_limit: u32,
    /// How many of a creature's moves are sampled and fetched
    pub move_sample_size: usize,
    /// Game version whose species flavor text is shown
    pub flavor_version: String,
    /// Version group whose move flavor text is shown
    pub move_version_group: String,
    /// Language for genus and flavor text
    pub language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: POKEAPI_URL.to_string(),
            list_limit: KANTO_DEX_SIZE,
            move_sample_size: DEFAULT_MOVE_SAMPLE,
            flavor_version: "firered".to_string(),
            move_version_group: "black-white".to_string(),
            language: "en".to_string(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `POKEDEX_API_URL` - API root (default: `https://pokeapi.co/api/v2`)
    /// - `POKEDEX_LIST_LIMIT` - grid size (default: 151)
    /// - `POKEDEX_MOVE_SAMPLE` - moves fetched per detail (default: 20)
    /// - `POKEDEX_FLAVOR_VERSION` - species flavor version (default: `firered`)
    /// - `POKEDEX_MOVE_VERSION_GROUP` - move flavor version group (default: `black-white`)
    /// - `POKEDEX_LANGUAGE` - text language (default: `en`)
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = read_env::<String>("POKEDEX_API_URL") {
            config = config.with_base_url(url);
        }
        if let Some(limit) = read_env::<u32>("POKEDEX_LIST_LIMIT") {
            config.list_limit = limit;
        }
        if let Some(sample) = read_env::<usize>("POKEDEX_MOVE_SAMPLE") {
            config.move_sample_size = sample;
        }
        if let Some(version) = read_env::<String>("POKEDEX_FLAVOR_VERSION") {
            config.flavor_version = version;
        }
        if let Some(group) = read_env::<String>("POKEDEX_MOVE_VERSION_GROUP") {
            config.move_version_group = group;
        }
        if let Some(language) = read_env::<String>("POKEDEX_LANGUAGE") {
            config.language = language;
        }

        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn list_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.base_url, self.list_limit)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    pub fn type_url(&self, name: &str) -> String {
        format!("{}/type/{}", self.base_url, name)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse().ok()
}
