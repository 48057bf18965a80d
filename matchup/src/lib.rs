//! Type damage-relation aggregation for Pokedex creatures.
//!
//! Given the raw damage relations of each elemental type a creature has, this
//! crate works out how the creature as a whole takes damage from every
//! attacking type those relations mention.
//!
//! # Overview
//!
//! ```text
//! pokedex-api (PokeAPI resources)
//!        │
//!        ▼
//! pokedex-matchup (buckets + aggregation) ← THIS CRATE
//!        │
//!        ▼
//! pokedex-client (fetching, caching, detail assembly)
//! ```
//!
//! # Main Types
//!
//! - [`DamageRelationBucket`] - no/half/double damage lists of one type
//! - [`DamageMultiplierResult`] - weak/resistant/immune entries with multipliers
//! - [`DamageRelationNames`] - the same lists as plain names
//! - [`Type`] - the 18 elemental types and a built-in effectiveness chart
//!
//! # Example Usage
//!
//! ```
//! use pokedex_matchup::{DamageRelationBucket, calculate_damage_relations};
//!
//! // Pidgey: Normal/Flying, buckets in type declaration order
//! let normal = DamageRelationBucket::new(vec!["ghost"], vec![], vec!["fighting"]);
//! let flying = DamageRelationBucket::new(
//!     vec!["ground"],
//!     vec!["grass", "fighting", "bug"],
//!     vec!["electric", "ice", "rock"],
//! );
//!
//! let relations = calculate_damage_relations(&[normal, flying]);
//! assert_eq!(relations.weak_to, vec!["electric", "ice", "rock"]);
//! assert_eq!(relations.resistant_to, vec!["grass", "bug"]);
//! assert_eq!(relations.immune_to, vec!["ghost", "ground"]);
//! ```

pub mod query;
pub mod types;

pub use query::{
    calculate_damage_multipliers, calculate_damage_relations, collect_candidate_types,
    effective_multiplier, merge_damage_relations,
};
pub use types::{
    DamageMultiplierResult, DamageRelationBucket, DamageRelationNames, TYPE_CHART, Type,
    TypeMultiplierEntry,
};
