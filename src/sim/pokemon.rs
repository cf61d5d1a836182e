//! Combatant inputs and live battle state.
//!
//! A [`StatBlock`] is the narrow hand-off from whatever resolves identifiers
//! (the built-in catalog, or any other
//! [`CombatantSource`](crate::engine::CombatantSource) implementation).
//! [`Combatant::from_stat_block`] validates it and produces the mutable
//! in-battle representation.

use rand::Rng;

use crate::data::moves::MoveCategory;
use crate::data::types::Type;
use crate::error::SimulateError;
use crate::sim::stats::StatsSet;
use crate::sim::statuses::{self, StatusCondition};

/// Fully resolved, not-yet-validated combatant description.
#[derive(Clone, Debug)]
pub struct StatBlock {
    pub name: String,
    pub stats: StatsSet,
    /// One or two type names.
    pub types: Vec<String>,
    pub ability: String,
    pub moves: Vec<MoveSpec>,
}

#[derive(Clone, Debug)]
pub struct MoveSpec {
    pub name: String,
    pub move_type: String,
    /// Zero for pure-status moves.
    pub power: u16,
    pub category: MoveCategory,
    pub effect: Option<StatusEffectSpec>,
}

#[derive(Clone, Debug)]
pub struct StatusEffectSpec {
    /// Short status id ("par", "brn", "psn", "slp", "frz").
    pub condition: String,
    /// Trigger chance in percent.
    pub chance: u8,
}

/// A validated move, ready for the damage calculator.
#[derive(Clone, Debug)]
pub struct BattleMove {
    pub name: String,
    pub move_type: Type,
    pub power: u16,
    pub category: MoveCategory,
    pub effect: Option<(StatusCondition, u8)>,
}

/// Live in-battle state of one combatant.
#[derive(Clone, Debug)]
pub struct Combatant {
    pub name: String,
    pub stats: StatsSet,
    pub current_hp: u16,
    pub primary_type: Type,
    pub secondary_type: Option<Type>,
    pub ability: String,
    pub status: Option<StatusCondition>,
    /// Remaining sleep countdown; meaningful only while asleep.
    pub sleep_turns: u8,
    pub moves: Vec<BattleMove>,
}

impl Combatant {
    /// Validate a stat block and build the live combatant.
    ///
    /// Rejects zero max HP, an empty move list, and unknown type or status
    /// names, so the battle loop never runs on malformed data.
    pub fn from_stat_block(block: &StatBlock) -> Result<Self, SimulateError> {
        let fail = |reason: String| SimulateError::Validation {
            name: block.name.clone(),
            reason,
        };
        if block.stats.hp == 0 {
            return Err(fail("max HP must be positive".to_string()));
        }
        if block.moves.is_empty() {
            return Err(fail("move list is empty".to_string()));
        }
        if block.types.is_empty() || block.types.len() > 2 {
            return Err(fail(format!(
                "expected one or two types, got {}",
                block.types.len()
            )));
        }
        let primary = Type::from_name(&block.types[0])
            .ok_or_else(|| fail(format!("unknown type '{}'", block.types[0])))?;
        let secondary = match block.types.get(1) {
            Some(name) => {
                Some(Type::from_name(name).ok_or_else(|| fail(format!("unknown type '{name}'")))?)
            }
            None => None,
        };
        let mut moves = Vec::with_capacity(block.moves.len());
        for spec in &block.moves {
            let move_type = Type::from_name(&spec.move_type).ok_or_else(|| {
                fail(format!(
                    "move '{}' has unknown type '{}'",
                    spec.name, spec.move_type
                ))
            })?;
            let effect = match &spec.effect {
                Some(effect) => {
                    let condition = StatusCondition::from_id(&effect.condition).ok_or_else(|| {
                        fail(format!(
                            "move '{}' has unknown status '{}'",
                            spec.name, effect.condition
                        ))
                    })?;
                    Some((condition, effect.chance.min(100)))
                }
                None => None,
            };
            moves.push(BattleMove {
                name: spec.name.clone(),
                move_type,
                power: spec.power,
                category: spec.category,
                effect,
            });
        }
        Ok(Self {
            name: block.name.clone(),
            stats: block.stats,
            current_hp: block.stats.hp,
            primary_type: primary,
            secondary_type: secondary,
            ability: block.ability.clone(),
            status: None,
            sleep_turns: 0,
            moves,
        })
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    pub fn take_damage(&mut self, damage: u16) {
        self.current_hp = self.current_hp.saturating_sub(damage);
    }

    pub fn heal(&mut self, amount: u16) {
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp());
    }

    /// Apply a status. Returns false when one is already held. Sleep rolls
    /// its 1-3 turn countdown here.
    pub fn apply_status(&mut self, condition: StatusCondition, rng: &mut impl Rng) -> bool {
        if self.status.is_some() {
            return false;
        }
        if matches!(condition, StatusCondition::Sleep) {
            self.sleep_turns = statuses::roll_sleep_turns(rng);
        }
        self.status = Some(condition);
        true
    }

    pub fn clear_status(&mut self) {
        self.status = None;
        self.sleep_turns = 0;
    }

    /// "Fire/Flying" style label for log messages.
    pub fn type_label(&self) -> String {
        match self.secondary_type {
            Some(secondary) => format!("{}/{}", self.primary_type.name(), secondary.name()),
            None => self.primary_type.name().to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    pub(crate) fn sample_block(name: &str) -> StatBlock {
        StatBlock {
            name: name.to_string(),
            stats: StatsSet {
                hp: 100,
                atk: 80,
                def: 70,
                spa: 90,
                spd: 75,
                spe: 85,
            },
            types: vec!["Normal".to_string()],
            ability: "Run Away".to_string(),
            moves: vec![MoveSpec {
                name: "Tackle".to_string(),
                move_type: "Normal".to_string(),
                power: 40,
                category: MoveCategory::Physical,
                effect: None,
            }],
        }
    }

    pub(crate) fn sample_combatant(name: &str) -> Combatant {
        Combatant::from_stat_block(&sample_block(name)).expect("sample block is valid")
    }

    #[test]
    fn empty_move_list_is_rejected() {
        let mut block = sample_block("Empty");
        block.moves.clear();
        let err = Combatant::from_stat_block(&block).unwrap_err();
        assert!(matches!(err, SimulateError::Validation { .. }));
    }

    #[test]
    fn zero_hp_is_rejected() {
        let mut block = sample_block("Hollow");
        block.stats.hp = 0;
        assert!(Combatant::from_stat_block(&block).is_err());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let mut block = sample_block("Mystery");
        block.types = vec!["Shadow".to_string()];
        let err = Combatant::from_stat_block(&block).unwrap_err();
        assert!(err.to_string().contains("Shadow"));
    }

    #[test]
    fn damage_saturates_at_zero_and_heal_clamps_at_max() {
        let mut combatant = sample_combatant("Clamp");
        combatant.take_damage(10_000);
        assert_eq!(combatant.current_hp, 0);
        combatant.heal(10_000);
        assert_eq!(combatant.current_hp, combatant.max_hp());
    }

    #[test]
    fn second_status_does_not_stick() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut combatant = sample_combatant("Statused");
        assert!(combatant.apply_status(StatusCondition::Burn, &mut rng));
        assert!(!combatant.apply_status(StatusCondition::Paralysis, &mut rng));
        assert_eq!(combatant.status, Some(StatusCondition::Burn));
    }

    #[test]
    fn sleep_rolls_one_to_three_turns() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let mut combatant = sample_combatant("Sleeper");
            assert!(combatant.apply_status(StatusCondition::Sleep, &mut rng));
            assert!((1..=3).contains(&combatant.sleep_turns));
        }
    }
}
