//! Damage-relation buckets and aggregation results

use pokedex_api::{DamageRelations, TypeResource, resource_names};

use super::pokemon_type::Type;

/// How a single elemental type takes damage from attacking types.
///
/// One bucket per type the creature has, built from a single upstream fetch.
/// A name is not expected in more than one list, but nothing here relies on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DamageRelationBucket {
    /// Attacking types that deal no damage
    pub no_damage_from: Vec<String>,
    /// Attacking types that deal half damage
    pub half_damage_from: Vec<String>,
    /// Attacking types that deal double damage
    pub double_damage_from: Vec<String>,
}

impl DamageRelationBucket {
    pub fn new<S: Into<String>>(
        no_damage_from: impl IntoIterator<Item = S>,
        half_damage_from: impl IntoIterator<Item = S>,
        double_damage_from: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            no_damage_from: no_damage_from.into_iter().map(Into::into).collect(),
            half_damage_from: half_damage_from.into_iter().map(Into::into).collect(),
            double_damage_from: double_damage_from.into_iter().map(Into::into).collect(),
        }
    }

    /// Extract the `*_from` name lists of a `/type/{name}` response, in
    /// response order
    pub fn from_api(resource: &TypeResource) -> Self {
        Self::from_relations(&resource.damage_relations)
    }

    pub fn from_relations(relations: &DamageRelations) -> Self {
        Self {
            no_damage_from: resource_names(&relations.no_damage_from),
            half_damage_from: resource_names(&relations.half_damage_from),
            double_damage_from: resource_names(&relations.double_damage_from),
        }
    }

    /// Derive a bucket for `defender` from the built-in chart, attackers in
    /// chart order
    pub fn from_chart(defender: Type) -> Self {
        let mut bucket = Self::default();
        for attacker in Type::all() {
            let name = attacker.api_name().to_string();
            let effectiveness = attacker.effectiveness(defender);
            if effectiveness == 0.0 {
                bucket.no_damage_from.push(name);
            } else if effectiveness < 1.0 {
                bucket.half_damage_from.push(name);
            } else if effectiveness > 1.0 {
                bucket.double_damage_from.push(name);
            }
        }
        bucket
    }

    pub fn takes_no_damage_from(&self, attacking: &str) -> bool {
        self.no_damage_from.iter().any(|t| t == attacking)
    }

    pub fn takes_half_damage_from(&self, attacking: &str) -> bool {
        self.half_damage_from.iter().any(|t| t == attacking)
    }

    pub fn takes_double_damage_from(&self, attacking: &str) -> bool {
        self.double_damage_from.iter().any(|t| t == attacking)
    }

    pub fn is_empty(&self) -> bool {
        self.no_damage_from.is_empty()
            && self.half_damage_from.is_empty()
            && self.double_damage_from.is_empty()
    }
}

/// An attacking type and its net multiplier against the creature
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TypeMultiplierEntry {
    pub attacking_type: String,
    /// One of 0, 0.25, 0.5, 2 or 4 in practice; never 1
    pub multiplier: f32,
}

impl TypeMultiplierEntry {
    pub fn new(attacking_type: impl Into<String>, multiplier: f32) -> Self {
        Self {
            attacking_type: attacking_type.into(),
            multiplier,
        }
    }
}

/// Non-neutral matchups of a creature, with multipliers.
///
/// - `weak_to`: multiplier > 1, highest first
/// - `resistant_to`: 0 < multiplier < 1, most resistant first
/// - `immune_to`: multiplier 0, in discovery order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DamageMultiplierResult {
    pub weak_to: Vec<TypeMultiplierEntry>,
    pub resistant_to: Vec<TypeMultiplierEntry>,
    pub immune_to: Vec<TypeMultiplierEntry>,
}

impl DamageMultiplierResult {
    /// Net multiplier for an attacking type; 1.0 when it is not listed
    pub fn multiplier_for(&self, attacking: &str) -> f32 {
        self.weak_to
            .iter()
            .chain(&self.resistant_to)
            .chain(&self.immune_to)
            .find(|e| e.attacking_type == attacking)
            .map(|e| e.multiplier)
            .unwrap_or(1.0)
    }

    pub fn is_empty(&self) -> bool {
        self.weak_to.is_empty() && self.resistant_to.is_empty() && self.immune_to.is_empty()
    }
}

/// [`DamageMultiplierResult`] reduced to type names, same order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DamageRelationNames {
    pub weak_to: Vec<String>,
    pub resistant_to: Vec<String>,
    pub immune_to: Vec<String>,
}

impl From<&DamageMultiplierResult> for DamageRelationNames {
    fn from(result: &DamageMultiplierResult) -> Self {
        let names = |entries: &[TypeMultiplierEntry]| {
            entries
                .iter()
                .map(|e| e.attacking_type.clone())
                .collect::<Vec<_>>()
        };

        Self {
            weak_to: names(&result.weak_to),
            resistant_to: names(&result.resistant_to),
            immune_to: names(&result.immune_to),
        }
    }
}
