//! Damage-relation aggregation for mono- and dual-typed creatures

use std::collections::HashSet;

use crate::types::{
    DamageMultiplierResult, DamageRelationBucket, DamageRelationNames, TypeMultiplierEntry,
};

/// Every distinct attacking type named by any bucket.
///
/// First-insertion order: all `no_damage_from` lists in bucket order, then
/// all `half_damage_from`, then all `double_damage_from`.
pub fn collect_candidate_types(buckets: &[DamageRelationBucket]) -> Vec<String> {
    let names = buckets
        .iter()
        .flat_map(|b| &b.no_damage_from)
        .chain(buckets.iter().flat_map(|b| &b.half_damage_from))
        .chain(buckets.iter().flat_map(|b| &b.double_damage_from));

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for name in names {
        if seen.insert(name.as_str()) {
            candidates.push(name.clone());
        }
    }
    candidates
}

/// Net multiplier of `attacking` against a creature with these buckets.
///
/// Walks buckets in order; the first bucket granting immunity ends the walk
/// at 0. Half and double checks are independent, so a bucket listing the
/// type in both nets out to x1.
pub fn effective_multiplier(attacking: &str, buckets: &[DamageRelationBucket]) -> f32 {
    let mut multiplier = 1.0;

    for bucket in buckets {
        if bucket.takes_no_damage_from(attacking) {
            return 0.0;
        }
        if bucket.takes_half_damage_from(attacking) {
            multiplier *= 0.5;
        }
        if bucket.takes_double_damage_from(attacking) {
            multiplier *= 2.0;
        }
    }
    multiplier
}

/// Classify every candidate attacking type by its net multiplier.
///
/// Neutral (x1) matchups are dropped. `weak_to` is sorted highest multiplier
/// first, `resistant_to` lowest first, `immune_to` keeps discovery order.
/// Sorts are stable, so ties keep discovery order too.
pub fn calculate_damage_multipliers(buckets: &[DamageRelationBucket]) -> DamageMultiplierResult {
    let mut result = DamageMultiplierResult::default();

    for attacking in collect_candidate_types(buckets) {
        let multiplier = effective_multiplier(&attacking, buckets);
        let entry = TypeMultiplierEntry::new(attacking, multiplier);

        if multiplier == 0.0 {
            result.immune_to.push(entry);
        } else if multiplier < 1.0 {
            result.resistant_to.push(entry);
        } else if multiplier > 1.0 {
            result.weak_to.push(entry);
        }
    }

    result
        .weak_to
        .sort_by(|a, b| b.multiplier.total_cmp(&a.multiplier));
    result
        .resistant_to
        .sort_by(|a, b| a.multiplier.total_cmp(&b.multiplier));

    result
}

/// Names-only view of [`calculate_damage_multipliers`], same ordering
pub fn calculate_damage_relations(buckets: &[DamageRelationBucket]) -> DamageRelationNames {
    DamageRelationNames::from(&calculate_damage_multipliers(buckets))
}

/// Concatenate the lists of all buckets, in bucket order, keeping duplicates
pub fn merge_damage_relations(buckets: &[DamageRelationBucket]) -> DamageRelationBucket {
    let mut merged = DamageRelationBucket::default();
    for bucket in buckets {
        merged
            .no_damage_from
            .extend(bucket.no_damage_from.iter().cloned());
        merged
            .half_damage_from
            .extend(bucket.half_damage_from.iter().cloned());
        merged
            .double_damage_from
            .extend(bucket.double_damage_from.iter().cloned());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Type;

    // Damage relations as served by PokeAPI `/type/{name}`
    fn grass() -> DamageRelationBucket {
        DamageRelationBucket::new(
            vec![],
            vec!["ground", "water", "grass", "electric"],
            vec!["flying", "poison", "bug", "fire", "ice"],
        )
    }

    fn poison() -> DamageRelationBucket {
        DamageRelationBucket::new(
            vec![],
            vec!["fighting", "poison", "bug", "grass", "fairy"],
            vec!["ground", "psychic"],
        )
    }

    fn normal() -> DamageRelationBucket {
        DamageRelationBucket::new(vec!["ghost"], vec![], vec!["fighting"])
    }

    fn flying() -> DamageRelationBucket {
        DamageRelationBucket::new(
            vec!["ground"],
            vec!["grass", "fighting", "bug"],
            vec!["electric", "ice", "rock"],
        )
    }

    fn names(entries: &[TypeMultiplierEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.attacking_type.as_str()).collect()
    }

    fn multipliers(entries: &[TypeMultiplierEntry]) -> Vec<f32> {
        entries.iter().map(|e| e.multiplier).collect()
    }

    #[test]
    fn test_empty_input() {
        let result = calculate_damage_multipliers(&[]);

        assert!(result.weak_to.is_empty());
        assert!(result.resistant_to.is_empty());
        assert!(result.immune_to.is_empty());
        assert_eq!(calculate_damage_relations(&[]), DamageRelationNames::default());
        assert!(collect_candidate_types(&[]).is_empty());
    }

    #[test]
    fn test_single_bucket() {
        let bucket = DamageRelationBucket::new(vec!["ghost"], vec![], vec!["fighting"]);
        let result = calculate_damage_multipliers(&[bucket]);

        assert_eq!(result.immune_to, vec![TypeMultiplierEntry::new("ghost", 0.0)]);
        assert_eq!(result.weak_to, vec![TypeMultiplierEntry::new("fighting", 2.0)]);
        assert!(result.resistant_to.is_empty());
    }

    #[test]
    fn test_grass_poison() {
        let result = calculate_damage_multipliers(&[grass(), poison()]);

        assert_eq!(names(&result.weak_to), vec!["flying", "fire", "ice", "psychic"]);
        assert_eq!(multipliers(&result.weak_to), vec![2.0; 4]);
        assert_eq!(
            names(&result.resistant_to),
            vec!["grass", "water", "electric", "fighting", "fairy"]
        );
        assert_eq!(multipliers(&result.resistant_to), vec![0.25, 0.5, 0.5, 0.5, 0.5]);
        assert!(result.immune_to.is_empty());
        // Ground, poison and bug cancel out to neutral
        assert_eq!(result.multiplier_for("ground"), 1.0);
        assert_eq!(result.multiplier_for("bug"), 1.0);
    }

    #[test]
    fn test_normal_flying() {
        let result = calculate_damage_multipliers(&[normal(), flying()]);

        assert_eq!(names(&result.weak_to), vec!["electric", "ice", "rock"]);
        assert_eq!(names(&result.resistant_to), vec!["grass", "bug"]);
        assert_eq!(multipliers(&result.resistant_to), vec![0.5, 0.5]);

        let mut immune = names(&result.immune_to);
        immune.sort();
        assert_eq!(immune, vec!["ghost", "ground"]);
        assert_eq!(multipliers(&result.immune_to), vec![0.0, 0.0]);
        // Fighting: x2 from normal, x0.5 from flying
        assert_eq!(result.multiplier_for("fighting"), 1.0);
    }

    #[test]
    fn test_immune_keeps_discovery_order() {
        let result = calculate_damage_multipliers(&[normal(), flying()]);
        assert_eq!(names(&result.immune_to), vec!["ghost", "ground"]);

        let result = calculate_damage_multipliers(&[flying(), normal()]);
        assert_eq!(names(&result.immune_to), vec!["ground", "ghost"]);
    }

    #[test]
    fn test_quad_weakness_sorted_first() {
        // Grass/Flying: ice hits 4x
        let buckets = [
            DamageRelationBucket::from_chart(Type::Grass),
            DamageRelationBucket::from_chart(Type::Flying),
        ];
        let result = calculate_damage_multipliers(&buckets);

        assert_eq!(result.weak_to[0], TypeMultiplierEntry::new("ice", 4.0));
        assert!(result.weak_to[1..].iter().all(|e| e.multiplier == 2.0));
        assert_eq!(result.immune_to, vec![TypeMultiplierEntry::new("ground", 0.0)]);
    }

    #[test]
    fn test_relation_names_match_multiplier_order() {
        let names = calculate_damage_relations(&[grass(), poison()]);

        assert_eq!(names.weak_to, vec!["flying", "fire", "ice", "psychic"]);
        // Most resistant first, same as the multiplier layer
        assert_eq!(
            names.resistant_to,
            vec!["grass", "water", "electric", "fighting", "fairy"]
        );
        assert!(names.immune_to.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let buckets = [grass(), poison()];

        assert_eq!(
            calculate_damage_multipliers(&buckets),
            calculate_damage_multipliers(&buckets)
        );
        assert_eq!(
            calculate_damage_relations(&buckets),
            calculate_damage_relations(&buckets)
        );
    }

    #[test]
    fn test_bucket_order_does_not_change_multipliers() {
        let forward = calculate_damage_multipliers(&[grass(), poison()]);
        let reversed = calculate_damage_multipliers(&[poison(), grass()]);

        for attacking in collect_candidate_types(&[grass(), poison()]) {
            assert_eq!(
                forward.multiplier_for(&attacking),
                reversed.multiplier_for(&attacking),
                "{attacking}"
            );
        }
    }

    #[test]
    fn test_immunity_wins_in_either_order() {
        let immune = DamageRelationBucket::new(vec!["ground"], vec![], vec![]);
        let resistant = DamageRelationBucket::new(vec![], vec!["ground"], vec![]);

        let result = calculate_damage_multipliers(&[immune.clone(), resistant.clone()]);
        assert_eq!(result.immune_to, vec![TypeMultiplierEntry::new("ground", 0.0)]);
        assert!(result.resistant_to.is_empty());

        let result = calculate_damage_multipliers(&[resistant, immune]);
        assert_eq!(result.immune_to, vec![TypeMultiplierEntry::new("ground", 0.0)]);
        assert!(result.resistant_to.is_empty());
    }

    #[test]
    fn test_half_and_double_in_one_bucket_cancel() {
        let bucket = DamageRelationBucket::new(vec![], vec!["rock"], vec!["rock", "water"]);
        let result = calculate_damage_multipliers(&[bucket]);

        assert_eq!(result.multiplier_for("rock"), 1.0);
        assert_eq!(names(&result.weak_to), vec!["water"]);
        assert!(result.resistant_to.is_empty());
    }

    #[test]
    fn test_unknown_names_pass_through() {
        let bucket = DamageRelationBucket::new(vec!["shadow"], vec!["???"], vec![]);
        let names = calculate_damage_relations(&[bucket]);

        assert_eq!(names.immune_to, vec!["shadow"]);
        assert_eq!(names.resistant_to, vec!["???"]);
    }

    #[test]
    fn test_candidates_are_field_major_and_distinct() {
        let candidates = collect_candidate_types(&[normal(), flying()]);

        assert_eq!(
            candidates,
            vec!["ghost", "ground", "grass", "fighting", "bug", "electric", "ice", "rock"]
        );
    }

    #[test]
    fn test_duplicates_classified_once() {
        let first = DamageRelationBucket::new(vec!["ghost"], vec!["dark"], vec!["fighting"]);
        let second = DamageRelationBucket::new(vec!["ghost"], vec!["dark", "dark"], vec!["psychic"]);
        let result = calculate_damage_multipliers(&[first, second]);

        assert_eq!(names(&result.immune_to), vec!["ghost"]);
        // Listed twice in one bucket still counts once per bucket
        assert_eq!(result.resistant_to, vec![TypeMultiplierEntry::new("dark", 0.25)]);
        assert_eq!(names(&result.weak_to), vec!["fighting", "psychic"]);
    }

    #[test]
    fn test_merge_single_bucket() {
        let bucket = DamageRelationBucket::new(vec!["ghost"], vec!["dark"], vec!["fighting"]);
        assert_eq!(merge_damage_relations(&[bucket.clone()]), bucket);
    }

    #[test]
    fn test_merge_multiple_buckets() {
        let merged = merge_damage_relations(&[
            DamageRelationBucket::new(vec!["ghost"], vec!["dark"], vec!["fighting"]),
            DamageRelationBucket::new(vec!["steel"], vec!["fire"], vec!["ground"]),
        ]);

        assert_eq!(merged.no_damage_from, vec!["ghost", "steel"]);
        assert_eq!(merged.half_damage_from, vec!["dark", "fire"]);
        assert_eq!(merged.double_damage_from, vec!["fighting", "ground"]);
    }

    #[test]
    fn test_merge_keeps_duplicates() {
        let merged = merge_damage_relations(&[
            DamageRelationBucket::new(vec!["ghost"], vec!["dark"], vec!["fighting"]),
            DamageRelationBucket::new(vec!["ghost"], vec!["dark"], vec!["psychic"]),
        ]);

        assert_eq!(merged.no_damage_from, vec!["ghost", "ghost"]);
        assert_eq!(merged.half_damage_from, vec!["dark", "dark"]);
        assert_eq!(merged.double_damage_from, vec!["fighting", "psychic"]);
        assert!(merge_damage_relations(&[]).is_empty());
    }

    #[test]
    fn test_matches_chart_for_every_typing() {
        for (i, first) in Type::all().iter().enumerate() {
            for second in &Type::all()[i..] {
                let defenders: Vec<Type> = if first == second {
                    vec![*first]
                } else {
                    vec![*first, *second]
                };
                let buckets: Vec<DamageRelationBucket> = defenders
                    .iter()
                    .map(|t| DamageRelationBucket::from_chart(*t))
                    .collect();
                let result = calculate_damage_multipliers(&buckets);

                for attacker in Type::all() {
                    assert_eq!(
                        result.multiplier_for(attacker.api_name()),
                        attacker.effectiveness_multi(&defenders),
                        "{attacker} vs {defenders:?}"
                    );
                }
            }
        }
    }
}
