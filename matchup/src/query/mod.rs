//! Aggregation of per-type damage relations into creature-level matchups
//!
//! Every function here is pure: the same buckets in the same order always
//! produce the same result.

mod aggregate;

pub use aggregate::{
    calculate_damage_multipliers, calculate_damage_relations, collect_candidate_types,
    effective_multiplier, merge_damage_relations,
};
