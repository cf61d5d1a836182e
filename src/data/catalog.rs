//! [`CombatantSource`] over the built-in species and move catalogs.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::data::moves::get_move;
use crate::data::species::{SpeciesData, POKEDEX};
use crate::data::normalize_id;
use crate::engine::CombatantSource;
use crate::sim::pokemon::{MoveSpec, StatBlock, StatusEffectSpec};
use crate::sim::stats::StatsSet;

/// Dex-number lookup built once from [`POKEDEX`]; lets "25" resolve the
/// same species as "pikachu".
static DEX_NUMBERS: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    POKEDEX
        .entries()
        .map(|(key, species)| (species.dex, *key))
        .collect()
});

/// Resolves identifiers against the bundled data set.
///
/// Accepts species names in any casing or punctuation ("Mr. Mime" style
/// names normalize the same way the keys do) and national dex numbers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }

    /// All species names in the catalog, unordered.
    pub fn species_names(&self) -> impl Iterator<Item = &'static str> {
        POKEDEX.values().map(|species| species.name)
    }

    fn lookup(&self, identifier: &str) -> Option<&'static SpeciesData> {
        if let Ok(dex) = identifier.trim().parse::<u16>() {
            return DEX_NUMBERS.get(&dex).and_then(|key| POKEDEX.get(key));
        }
        POKEDEX.get(normalize_id(identifier).as_str())
    }
}

impl CombatantSource for BuiltinCatalog {
    fn resolve(&self, identifier: &str) -> Option<StatBlock> {
        let species = self.lookup(identifier)?;
        let moves = species
            .moves
            .iter()
            .filter_map(|id| get_move(id))
            .map(|data| MoveSpec {
                name: data.name.to_string(),
                move_type: data.move_type.to_string(),
                power: data.base_power,
                category: data.category,
                effect: data.secondary.as_ref().map(|secondary| StatusEffectSpec {
                    condition: secondary.status.to_string(),
                    chance: secondary.chance,
                }),
            })
            .collect();
        Some(StatBlock {
            name: species.name.to_string(),
            stats: StatsSet {
                hp: species.base_stats.hp,
                atk: species.base_stats.atk,
                def: species.base_stats.def,
                spa: species.base_stats.spa,
                spd: species.base_stats.spd,
                spe: species.base_stats.spe,
            },
            types: species.types.iter().map(|t| t.to_string()).collect(),
            ability: species.ability.to_string(),
            moves,
        })
    }
}
