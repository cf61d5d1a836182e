//! Pure damage calculation.
//!
//! `base = (2 * level / 5 + 2) * power * attack / defense / 50 + 2` at a
//! fixed level of 50, then the type multiplier. Integer math with floor
//! rounding throughout; nonzero power against a non-immune defender always
//! deals at least 1.

use crate::sim::pokemon::{BattleMove, Combatant};
use crate::sim::stats::{effective_attack, effective_defense};

const LEVEL: u32 = 50;

pub fn compute_damage(
    attacker: &Combatant,
    defender: &Combatant,
    battle_move: &BattleMove,
    type_multiplier: f32,
) -> u16 {
    if battle_move.power == 0 || type_multiplier == 0.0 {
        return 0;
    }
    let attack = effective_attack(attacker, battle_move.category) as u32;
    let defense = effective_defense(defender, battle_move.category).max(1) as u32;
    let mut damage = (2 * LEVEL / 5 + 2)
        .saturating_mul(battle_move.power as u32)
        .saturating_mul(attack)
        / defense
        / 50
        + 2;
    damage = apply_type_multiplier(damage, type_multiplier);
    damage.clamp(1, u16::MAX as u32) as u16
}

/// Multipliers are powers of two (0.25 through 4), so apply them as shifts
/// to stay in integer math.
fn apply_type_multiplier(value: u32, multiplier: f32) -> u32 {
    if multiplier >= 4.0 {
        value.saturating_mul(4)
    } else if multiplier >= 2.0 {
        value.saturating_mul(2)
    } else if multiplier >= 1.0 {
        value
    } else if multiplier >= 0.5 {
        value / 2
    } else {
        value / 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::moves::MoveCategory;
    use crate::data::types::Type;
    use crate::sim::pokemon::tests::sample_combatant;
    use crate::sim::statuses::StatusCondition;

    fn physical_move(power: u16) -> BattleMove {
        BattleMove {
            name: "Strike".to_string(),
            move_type: Type::Normal,
            power,
            category: MoveCategory::Physical,
            effect: None,
        }
    }

    #[test]
    fn zero_multiplier_forces_zero_damage() {
        let attacker = sample_combatant("Attacker");
        let defender = sample_combatant("Defender");
        assert_eq!(compute_damage(&attacker, &defender, &physical_move(120), 0.0), 0);
    }

    #[test]
    fn zero_power_deals_no_damage() {
        let attacker = sample_combatant("Attacker");
        let defender = sample_combatant("Defender");
        assert_eq!(compute_damage(&attacker, &defender, &physical_move(0), 2.0), 0);
    }

    #[test]
    fn weak_hit_still_deals_at_least_one() {
        let mut attacker = sample_combatant("Weakling");
        attacker.stats.atk = 1;
        let mut defender = sample_combatant("Wall");
        defender.stats.def = 500;
        let damage = compute_damage(&attacker, &defender, &physical_move(10), 0.25);
        assert_eq!(damage, 1);
    }

    #[test]
    fn super_effective_doubles_neutral_damage() {
        let attacker = sample_combatant("Attacker");
        let defender = sample_combatant("Defender");
        let neutral = compute_damage(&attacker, &defender, &physical_move(80), 1.0);
        let double = compute_damage(&attacker, &defender, &physical_move(80), 2.0);
        assert_eq!(double, neutral * 2);
    }

    #[test]
    fn burn_halves_physical_output() {
        let mut attacker = sample_combatant("Burned");
        let defender = sample_combatant("Defender");
        let healthy = compute_damage(&attacker, &defender, &physical_move(80), 1.0);
        attacker.status = Some(StatusCondition::Burn);
        let burned = compute_damage(&attacker, &defender, &physical_move(80), 1.0);
        assert!(burned < healthy, "burned {burned} healthy {healthy}");
    }

    #[test]
    fn level_50_formula_spot_check() {
        // (2*50/5 + 2) * 90 * 80 / 70 / 50 + 2 = 22*90*80/70/50 + 2 = 47.
        let attacker = sample_combatant("Attacker");
        let defender = sample_combatant("Defender");
        let mut battle_move = physical_move(90);
        battle_move.category = MoveCategory::Physical;
        assert_eq!(compute_damage(&attacker, &defender, &battle_move, 1.0), 47);
    }
}
