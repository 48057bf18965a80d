//! Domain types for damage-relation aggregation

mod pokemon_type;
mod relations;

pub use pokemon_type::{TYPE_CHART, Type};
pub use relations::{
    DamageMultiplierResult, DamageRelationBucket, DamageRelationNames, TypeMultiplierEntry,
};
