//! Stat set and status-adjusted effective stats.

use crate::data::moves::MoveCategory;
use crate::sim::pokemon::Combatant;
use crate::sim::statuses::{StatusCondition, BURN_ATTACK_FACTOR, PARALYSIS_SPEED_FACTOR};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StatsSet {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

/// Speed after status modifiers: paralysis halves it (floor).
pub fn effective_speed(combatant: &Combatant) -> u16 {
    let spe = combatant.stats.spe;
    if matches!(combatant.status, Some(StatusCondition::Paralysis)) {
        ((spe as f32) * PARALYSIS_SPEED_FACTOR).floor() as u16
    } else {
        spe
    }
}

/// Attacking stat for the move category. Burn halves physical attack.
pub(crate) fn effective_attack(attacker: &Combatant, category: MoveCategory) -> u16 {
    match category {
        MoveCategory::Physical => {
            let atk = attacker.stats.atk;
            if matches!(attacker.status, Some(StatusCondition::Burn)) {
                ((atk as f32) * BURN_ATTACK_FACTOR).floor() as u16
            } else {
                atk
            }
        }
        MoveCategory::Special => attacker.stats.spa,
        MoveCategory::Status => 0,
    }
}

/// Defending stat for the move category.
pub(crate) fn effective_defense(defender: &Combatant, category: MoveCategory) -> u16 {
    match category {
        MoveCategory::Physical => defender.stats.def,
        MoveCategory::Special | MoveCategory::Status => defender.stats.spd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::pokemon::tests::sample_combatant;

    #[test]
    fn paralysis_halves_speed() {
        let mut combatant = sample_combatant("Runner");
        assert_eq!(effective_speed(&combatant), 85);
        combatant.status = Some(StatusCondition::Paralysis);
        assert_eq!(effective_speed(&combatant), 42);
    }

    #[test]
    fn burn_halves_physical_attack_only() {
        let mut combatant = sample_combatant("Brawler");
        combatant.status = Some(StatusCondition::Burn);
        assert_eq!(effective_attack(&combatant, MoveCategory::Physical), 40);
        assert_eq!(effective_attack(&combatant, MoveCategory::Special), 90);
    }
}
