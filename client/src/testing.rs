//! In-memory JSON source for tests

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::{FetchError, Result};
use crate::source::JsonSource;

pub const BASE: &str = "https://pokeapi.test/api/v2";

/// Serves canned documents and records every URL requested
#[derive(Default)]
pub struct FixtureSource {
    documents: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, document: Value) -> Self {
        self.documents.insert(url.into(), document);
        self
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .map(|r| r.iter().filter(|u| *u == url).count())
            .unwrap_or(0)
    }

    pub fn total_requests(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl JsonSource for FixtureSource {
    async fn get(&self, url: &str) -> Result<Value> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                url: url.to_string(),
            })
    }
}

fn named(name: &str, url: &str) -> Value {
    json!({ "name": name, "url": url })
}

fn names(list: &[&str]) -> Vec<Value> {
    list.iter()
        .map(|n| named(n, &format!("{BASE}/type/{n}")))
        .collect()
}

pub fn type_doc(name: &str, no: &[&str], half: &[&str], double: &[&str]) -> Value {
    json!({
        "name": name,
        "damage_relations": {
            "no_damage_from": names(no),
            "half_damage_from": names(half),
            "double_damage_from": names(double),
            "no_damage_to": [],
            "half_damage_to": [],
            "double_damage_to": []
        }
    })
}

pub fn pokemon_doc(id: u32, name: &str, types: &[&str], moves: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": named(t, &format!("{BASE}/type/{t}")) }))
        .collect();
    let moves: Vec<Value> = moves
        .iter()
        .map(|m| json!({ "move": named(m, &format!("{BASE}/move/{m}")) }))
        .collect();

    let artwork = format!("https://img.test/{id}.png");
    let species = named(name, &format!("{BASE}/pokemon-species/{id}"));

    json!({
        "id": id,
        "name": name,
        "height": 10,
        "weight": 130,
        "sprites": { "other": { "official-artwork": { "front_default": artwork } } },
        "types": types,
        "stats": [{ "base_stat": 60, "effort": 0, "stat": named("hp", "") }],
        "moves": moves,
        "species": species
    })
}

pub fn move_doc(name: &str, type_name: &str, text: &str) -> Value {
    json!({
        "name": name,
        "type": named(type_name, ""),
        "flavor_text_entries": [{
            "flavor_text": text,
            "language": named("en", ""),
            "version_group": named("black-white", "")
        }]
    })
}

/// Bulbasaur and Ivysaur with everything their detail cards need.
///
/// `growl` is listed as a move but has no document.
pub fn kanto_starters() -> FixtureSource {
    let chain_url = format!("{BASE}/evolution-chain/1");

    FixtureSource::new()
        .with(
            format!("{BASE}/pokemon?limit=151"),
            json!({
                "count": 2,
                "next": null,
                "previous": null,
                "results": [
                    named("bulbasaur", &format!("{BASE}/pokemon/1")),
                    named("ivysaur", &format!("{BASE}/pokemon/2"))
                ]
            }),
        )
        .with(
            format!("{BASE}/pokemon/bulbasaur"),
            pokemon_doc(1, "bulbasaur", &["grass", "poison"], &["vine-whip", "tackle"]),
        )
        .with(
            format!("{BASE}/pokemon/ivysaur"),
            pokemon_doc(2, "ivysaur", &["grass", "poison"], &["vine-whip", "tackle", "growl"]),
        )
        .with(
            format!("{BASE}/pokemon-species/1"),
            json!({
                "name": "bulbasaur",
                "genera": [{ "genus": "Seed Pokémon", "language": named("en", "") }],
                "flavor_text_entries": [{
                    "flavor_text": "A strange seed was\nplanted on its back at birth.",
                    "language": named("en", ""),
                    "version": named("firered", "")
                }],
                "evolves_from_species": null,
                "evolution_chain": { "url": chain_url }
            }),
        )
        .with(
            format!("{BASE}/pokemon-species/2"),
            json!({
                "name": "ivysaur",
                "genera": [{ "genus": "Seed Pokémon", "language": named("en", "") }],
                "flavor_text_entries": [{
                    "flavor_text": "When the bulb on\nits back grows large, it appears\u{c}to lose the ability to stand.",
                    "language": named("en", ""),
                    "version": named("firered", "")
                }],
                "evolves_from_species": named("bulbasaur", &format!("{BASE}/pokemon-species/1")),
                "evolution_chain": { "url": chain_url }
            }),
        )
        .with(
            chain_url.clone(),
            json!({
                "id": 1,
                "chain": {
                    "species": named("bulbasaur", ""),
                    "evolves_to": [{
                        "species": named("ivysaur", ""),
                        "evolves_to": [{ "species": named("venusaur", ""), "evolves_to": [] }]
                    }]
                }
            }),
        )
        .with(
            format!("{BASE}/type/grass"),
            type_doc(
                "grass",
                &[],
                &["ground", "water", "grass", "electric"],
                &["flying", "poison", "bug", "fire", "ice"],
            ),
        )
        .with(
            format!("{BASE}/type/poison"),
            type_doc(
                "poison",
                &[],
                &["fighting", "poison", "bug", "grass", "fairy"],
                &["ground", "psychic"],
            ),
        )
        .with(
            format!("{BASE}/move/vine-whip"),
            move_doc("vine-whip", "grass", "The target is struck\nwith slender vines."),
        )
        .with(
            format!("{BASE}/move/tackle"),
            move_doc("tackle", "normal", "A physical attack."),
        )
}
