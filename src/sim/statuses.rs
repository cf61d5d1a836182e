//! Status conditions and the per-turn policy around them.
//!
//! Exactly five conditions exist. A combatant holds at most one at a time;
//! inflicting a second is a no-op. Burn and poison deal residual damage at
//! the end of each turn, sleep and freeze block the action outright, and
//! paralysis blocks it one action in four.

use rand::Rng;

use crate::sim::pokemon::Combatant;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum StatusCondition {
    Paralysis,
    Burn,
    Poison,
    Sleep,
    Freeze,
}

/// Chance that a paralyzed combatant loses its action.
pub const PARALYSIS_SKIP_CHANCE: f64 = 0.25;
/// Speed multiplier while paralyzed.
pub const PARALYSIS_SPEED_FACTOR: f32 = 0.5;
/// Physical-attack multiplier while burned.
pub const BURN_ATTACK_FACTOR: f32 = 0.5;
/// Chance per action that a frozen combatant thaws.
pub const THAW_CHANCE: f64 = 0.2;
/// Burn residual: max HP / 16 per turn, minimum 1.
pub const BURN_DAMAGE_DIVISOR: u32 = 16;
/// Poison residual: max HP / 8 per turn, minimum 1.
pub const POISON_DAMAGE_DIVISOR: u32 = 8;

impl StatusCondition {
    /// Short id as used by move data ("par", "brn", "psn", "slp", "frz").
    pub fn from_id(id: &str) -> Option<StatusCondition> {
        match id {
            "par" => Some(StatusCondition::Paralysis),
            "brn" => Some(StatusCondition::Burn),
            "psn" => Some(StatusCondition::Poison),
            "slp" => Some(StatusCondition::Sleep),
            "frz" => Some(StatusCondition::Freeze),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            StatusCondition::Paralysis => "par",
            StatusCondition::Burn => "brn",
            StatusCondition::Poison => "psn",
            StatusCondition::Sleep => "slp",
            StatusCondition::Freeze => "frz",
        }
    }

    pub fn inflicted_message(self) -> &'static str {
        match self {
            StatusCondition::Paralysis => "was paralyzed",
            StatusCondition::Burn => "was burned",
            StatusCondition::Poison => "was poisoned",
            StatusCondition::Sleep => "fell asleep",
            StatusCondition::Freeze => "was frozen solid",
        }
    }
}

pub fn roll_sleep_turns(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=3)
}

/// Outcome of the start-of-action status check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionGate {
    /// No status interferes; the action proceeds.
    Free,
    /// The status just cleared (woke up / thawed) and the action proceeds.
    Recovered(StatusCondition),
    /// The status consumed the action.
    Blocked(StatusCondition),
}

/// Run the status gate for one action. Sleep wakes when its counter has run
/// out, freeze thaws with [`THAW_CHANCE`], paralysis skips with
/// [`PARALYSIS_SKIP_CHANCE`]; burn and poison never block.
pub fn check_action_gate(combatant: &mut Combatant, rng: &mut impl Rng) -> ActionGate {
    match combatant.status {
        Some(StatusCondition::Sleep) => {
            if combatant.sleep_turns == 0 {
                combatant.clear_status();
                ActionGate::Recovered(StatusCondition::Sleep)
            } else {
                ActionGate::Blocked(StatusCondition::Sleep)
            }
        }
        Some(StatusCondition::Freeze) => {
            if rng.gen_bool(THAW_CHANCE) {
                combatant.clear_status();
                ActionGate::Recovered(StatusCondition::Freeze)
            } else {
                ActionGate::Blocked(StatusCondition::Freeze)
            }
        }
        Some(StatusCondition::Paralysis) => {
            if rng.gen_bool(PARALYSIS_SKIP_CHANCE) {
                ActionGate::Blocked(StatusCondition::Paralysis)
            } else {
                ActionGate::Free
            }
        }
        _ => ActionGate::Free,
    }
}

/// End-of-turn residual damage for the given status, if any.
pub fn residual_damage(status: StatusCondition, max_hp: u16) -> Option<u16> {
    match status {
        StatusCondition::Burn => Some((max_hp as u32 / BURN_DAMAGE_DIVISOR).max(1) as u16),
        StatusCondition::Poison => Some((max_hp as u32 / POISON_DAMAGE_DIVISOR).max(1) as u16),
        _ => None,
    }
}
