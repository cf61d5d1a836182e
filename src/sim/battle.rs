//! Turn order resolution and the battle state machine.
//!
//! One [`BattleState`] owns both live combatants and the action log. A turn
//! orders both actions by effective speed, runs the status gate before each,
//! resolves the chosen move, then applies end-of-turn residual damage.
//! [`run_battle`] drives turns until a faint or the turn cap.

use rand::rngs::SmallRng;
use rand::Rng;
use serde::Serialize;

use crate::battle_logger::BattleLog;
use crate::data::types::effectiveness_dual;
use crate::sim::damage::compute_damage;
use crate::sim::pokemon::Combatant;
use crate::sim::stats::effective_speed;
use crate::sim::statuses::{self, ActionGate, StatusCondition};

/// Safety cap: no battle runs longer than this many turns.
pub const TURN_LIMIT: u32 = 100;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Attack,
    Status,
    Faint,
}

/// One chronological entry in the battle log.
#[derive(Clone, Debug, Serialize)]
pub struct ActionRecord {
    pub turn: u32,
    pub actor: String,
    pub kind: ActionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effectiveness: Option<&'static str>,
    pub message: String,
}

/// How the battle was decided.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The loser fainted.
    Faint,
    /// The turn cap was reached (or both fainted simultaneously) and the
    /// higher remaining HP fraction decided the battle.
    HpRemaining,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BattleOutcome {
    pub winner: usize,
    pub loser: usize,
    pub turns: u32,
    pub decided_by: OutcomeKind,
}

#[derive(Clone, Debug)]
pub struct BattleState {
    pub combatants: [Combatant; 2],
    pub turn: u32,
    pub log: BattleLog,
}

impl BattleState {
    pub fn new(first: Combatant, second: Combatant) -> Self {
        Self {
            combatants: [first, second],
            turn: 0,
            log: BattleLog::new(),
        }
    }
}

/// Drive the state machine to termination.
pub fn run_battle(state: &mut BattleState, rng: &mut SmallRng) -> BattleOutcome {
    loop {
        if state.turn >= TURN_LIMIT {
            return hp_fraction_outcome(state);
        }
        state.turn += 1;
        execute_turn(state, rng);
        if let Some(outcome) = faint_outcome(state) {
            return outcome;
        }
        apply_end_of_turn(state);
        if let Some(outcome) = faint_outcome(state) {
            return outcome;
        }
    }
}

/// Action order for the current turn: higher effective speed first, the
/// first combatant on ties. Fixed tie-break keeps replays reproducible.
pub fn turn_order(first: &Combatant, second: &Combatant) -> [usize; 2] {
    if effective_speed(second) > effective_speed(first) {
        [1, 0]
    } else {
        [0, 1]
    }
}

pub(crate) fn execute_turn(state: &mut BattleState, rng: &mut SmallRng) {
    let turn = state.turn;
    let order = turn_order(&state.combatants[0], &state.combatants[1]);
    for &idx in order.iter() {
        let target = 1 - idx;
        if state.combatants[idx].is_fainted() {
            continue;
        }
        match statuses::check_action_gate(&mut state.combatants[idx], rng) {
            ActionGate::Blocked(status) => {
                let name = state.combatants[idx].name.clone();
                state.log.status_blocked(turn, &name, status);
                continue;
            }
            ActionGate::Recovered(status) => {
                let name = state.combatants[idx].name.clone();
                state.log.status_recovered(turn, &name, status);
            }
            ActionGate::Free => {}
        }
        let (attacker, defender) = split_pair(&mut state.combatants, idx);
        resolve_attack(turn, attacker, defender, &mut state.log, rng);
        if state.combatants[target].is_fainted() {
            let name = state.combatants[target].name.clone();
            state.log.faint(turn, &name);
            break;
        }
    }
}

/// Burn/poison residual damage and the sleep countdown.
pub(crate) fn apply_end_of_turn(state: &mut BattleState) {
    let turn = state.turn;
    for idx in 0..2 {
        if state.combatants[idx].is_fainted() {
            continue;
        }
        match state.combatants[idx].status {
            Some(status @ (StatusCondition::Burn | StatusCondition::Poison)) => {
                let max_hp = state.combatants[idx].max_hp();
                let damage = statuses::residual_damage(status, max_hp).unwrap_or(0);
                state.combatants[idx].take_damage(damage);
                let name = state.combatants[idx].name.clone();
                let remaining = state.combatants[idx].current_hp;
                state.log.residual(turn, &name, status, damage, remaining, max_hp);
                if remaining == 0 {
                    state.log.faint(turn, &name);
                }
            }
            Some(StatusCondition::Sleep) => {
                let combatant = &mut state.combatants[idx];
                combatant.sleep_turns = combatant.sleep_turns.saturating_sub(1);
            }
            _ => {}
        }
    }
}

fn resolve_attack(
    turn: u32,
    attacker: &mut Combatant,
    defender: &mut Combatant,
    log: &mut BattleLog,
    rng: &mut SmallRng,
) {
    let Some(choice) = select_move(attacker, defender) else {
        return;
    };
    let battle_move = attacker.moves[choice].clone();
    let multiplier = effectiveness_dual(
        battle_move.move_type,
        defender.primary_type,
        defender.secondary_type,
    );
    let damage = compute_damage(attacker, defender, &battle_move, multiplier);
    defender.take_damage(damage);
    log.attack(
        turn,
        &attacker.name,
        &defender.name,
        &battle_move,
        damage,
        multiplier,
        defender.current_hp,
        defender.max_hp(),
    );
    // Type immunity blocks the secondary status along with the damage.
    if multiplier == 0.0 {
        return;
    }
    let Some((condition, chance)) = battle_move.effect else {
        return;
    };
    if defender.is_fainted() || defender.status.is_some() {
        return;
    }
    if rng.gen_range(0u8..100) < chance && defender.apply_status(condition, rng) {
        let name = defender.name.clone();
        log.status_inflicted(turn, &name, condition);
    }
}

/// Deterministic move choice: the damaging move with the highest
/// power x effectiveness against the current opponent, lowest index on ties.
/// A moveset with no damaging move falls back to its first move.
fn select_move(attacker: &Combatant, defender: &Combatant) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, battle_move) in attacker.moves.iter().enumerate() {
        if battle_move.power == 0 {
            continue;
        }
        let score = battle_move.power as f32
            * effectiveness_dual(
                battle_move.move_type,
                defender.primary_type,
                defender.secondary_type,
            );
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((idx, score));
        }
    }
    match best {
        Some((idx, _)) => Some(idx),
        None if attacker.moves.is_empty() => None,
        None => Some(0),
    }
}

fn split_pair(combatants: &mut [Combatant; 2], idx: usize) -> (&mut Combatant, &mut Combatant) {
    let (left, right) = combatants.split_at_mut(1);
    if idx == 0 {
        (&mut left[0], &mut right[0])
    } else {
        (&mut right[0], &mut left[0])
    }
}

fn faint_outcome(state: &BattleState) -> Option<BattleOutcome> {
    let first_down = state.combatants[0].is_fainted();
    let second_down = state.combatants[1].is_fainted();
    match (first_down, second_down) {
        (false, false) => None,
        (true, false) => Some(BattleOutcome {
            winner: 1,
            loser: 0,
            turns: state.turn,
            decided_by: OutcomeKind::Faint,
        }),
        (false, true) => Some(BattleOutcome {
            winner: 0,
            loser: 1,
            turns: state.turn,
            decided_by: OutcomeKind::Faint,
        }),
        (true, true) => Some(hp_fraction_outcome(state)),
    }
}

/// Stalemate fallback: compare remaining HP fractions without floats by
/// cross-multiplying. An exact tie goes to the first combatant.
fn hp_fraction_outcome(state: &BattleState) -> BattleOutcome {
    let [first, second] = &state.combatants;
    let first_fraction = first.current_hp as u64 * second.max_hp() as u64;
    let second_fraction = second.current_hp as u64 * first.max_hp() as u64;
    let winner = if first_fraction >= second_fraction { 0 } else { 1 };
    BattleOutcome {
        winner,
        loser: 1 - winner,
        turns: state.turn,
        decided_by: OutcomeKind::HpRemaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::moves::MoveCategory;
    use crate::data::types::Type;
    use crate::sim::pokemon::tests::{sample_block, sample_combatant};
    use crate::sim::pokemon::{BattleMove, Combatant, MoveSpec, StatusEffectSpec};
    use rand::SeedableRng;

    fn combatant_with_moves(name: &str, specs: Vec<MoveSpec>) -> Combatant {
        let mut block = sample_block(name);
        block.moves = specs;
        Combatant::from_stat_block(&block).expect("block is valid")
    }

    fn thunder_wave() -> MoveSpec {
        MoveSpec {
            name: "Thunder Wave".to_string(),
            move_type: "Electric".to_string(),
            power: 0,
            category: MoveCategory::Status,
            effect: Some(StatusEffectSpec {
                condition: "par".to_string(),
                chance: 100,
            }),
        }
    }

    fn splash() -> MoveSpec {
        MoveSpec {
            name: "Splash".to_string(),
            move_type: "Normal".to_string(),
            power: 0,
            category: MoveCategory::Status,
            effect: None,
        }
    }

    #[test]
    fn faster_combatant_acts_first() {
        let slow = sample_combatant("Slow");
        let mut fast = sample_combatant("Fast");
        fast.stats.spe = 200;
        assert_eq!(turn_order(&slow, &fast), [1, 0]);
        assert_eq!(turn_order(&fast, &slow), [0, 1]);
    }

    #[test]
    fn speed_tie_goes_to_the_first_combatant() {
        let first = sample_combatant("First");
        let second = sample_combatant("Second");
        assert_eq!(first.stats.spe, second.stats.spe);
        assert_eq!(turn_order(&first, &second), [0, 1]);
    }

    #[test]
    fn paralysis_speed_drop_changes_order() {
        let mut first = sample_combatant("First");
        let second = sample_combatant("Second");
        first.status = Some(StatusCondition::Paralysis);
        assert_eq!(turn_order(&first, &second), [1, 0]);
    }

    #[test]
    fn zero_power_status_move_deals_no_damage_but_applies_status() {
        let attacker = combatant_with_moves("Waver", vec![thunder_wave()]);
        let defender = combatant_with_moves("Target", vec![splash()]);
        let mut state = BattleState::new(attacker, defender);
        let mut rng = SmallRng::seed_from_u64(0);
        state.turn = 1;
        execute_turn(&mut state, &mut rng);
        assert_eq!(state.combatants[1].current_hp, state.combatants[1].max_hp());
        assert_eq!(state.combatants[1].status, Some(StatusCondition::Paralysis));
    }

    #[test]
    fn status_move_blocked_by_type_immunity() {
        let attacker = combatant_with_moves("Waver", vec![thunder_wave()]);
        let mut block = sample_block("Grounded");
        block.types = vec!["Ground".to_string()];
        block.moves = vec![splash()];
        let defender = Combatant::from_stat_block(&block).expect("valid");
        let mut state = BattleState::new(attacker, defender);
        let mut rng = SmallRng::seed_from_u64(0);
        state.turn = 1;
        execute_turn(&mut state, &mut rng);
        assert_eq!(state.combatants[1].status, None);
    }

    #[test]
    fn fainted_defender_never_retaliates() {
        let mut attacker = sample_combatant("Crusher");
        attacker.stats.atk = 5_000;
        attacker.stats.spe = 200;
        let defender = sample_combatant("Victim");
        let mut state = BattleState::new(attacker, defender);
        let mut rng = SmallRng::seed_from_u64(0);
        state.turn = 1;
        execute_turn(&mut state, &mut rng);
        assert!(state.combatants[1].is_fainted());
        // One attack plus one faint record; the victim never acted.
        let kinds: Vec<ActionKind> = state.log.actions().iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![ActionKind::Attack, ActionKind::Faint]);
        assert_eq!(state.combatants[0].current_hp, state.combatants[0].max_hp());
    }

    #[test]
    fn select_move_prefers_effective_power() {
        let mut attacker = sample_combatant("Picker");
        attacker.moves = vec![
            BattleMove {
                name: "Slash".to_string(),
                move_type: Type::Normal,
                power: 70,
                category: MoveCategory::Physical,
                effect: None,
            },
            BattleMove {
                name: "Thunderbolt".to_string(),
                move_type: Type::Electric,
                power: 90,
                category: MoveCategory::Special,
                effect: None,
            },
        ];
        let mut water = sample_block("Floater");
        water.types = vec!["Water".to_string(), "Flying".to_string()];
        let defender = Combatant::from_stat_block(&water).expect("valid");
        // 90 * 4.0 beats 70 * 1.0.
        assert_eq!(select_move(&attacker, &defender), Some(1));
        let mut ground = sample_block("Digger");
        ground.types = vec!["Ground".to_string()];
        let grounded = Combatant::from_stat_block(&ground).expect("valid");
        // Electric is useless against Ground; fall back to Slash.
        assert_eq!(select_move(&attacker, &grounded), Some(0));
    }

    #[test]
    fn burn_and_poison_tick_at_end_of_turn() {
        let mut burned = sample_combatant("Burned");
        burned.status = Some(StatusCondition::Burn);
        let mut poisoned = sample_combatant("Poisoned");
        poisoned.status = Some(StatusCondition::Poison);
        let mut state = BattleState::new(burned, poisoned);
        state.turn = 1;
        apply_end_of_turn(&mut state);
        // 100 max HP: burn 100/16 = 6, poison 100/8 = 12.
        assert_eq!(state.combatants[0].current_hp, 94);
        assert_eq!(state.combatants[1].current_hp, 88);
    }

    #[test]
    fn sleep_counter_ticks_down_at_end_of_turn() {
        let mut sleeper = sample_combatant("Sleeper");
        sleeper.status = Some(StatusCondition::Sleep);
        sleeper.sleep_turns = 2;
        let other = sample_combatant("Other");
        let mut state = BattleState::new(sleeper, other);
        state.turn = 1;
        apply_end_of_turn(&mut state);
        assert_eq!(state.combatants[0].sleep_turns, 1);
        assert_eq!(state.combatants[0].status, Some(StatusCondition::Sleep));
        apply_end_of_turn(&mut state);
        assert_eq!(state.combatants[0].sleep_turns, 0);
    }

    #[test]
    fn residual_damage_can_end_the_battle() {
        let mut burned = sample_combatant("Fading");
        burned.status = Some(StatusCondition::Burn);
        burned.current_hp = 3;
        let healthy = sample_combatant("Healthy");
        let mut state = BattleState::new(burned, healthy);
        state.turn = 1;
        apply_end_of_turn(&mut state);
        assert!(state.combatants[0].is_fainted());
        let outcome = faint_outcome(&state).expect("battle over");
        assert_eq!(outcome.winner, 1);
        assert_eq!(outcome.decided_by, OutcomeKind::Faint);
    }

    #[test]
    fn stalemate_prefers_higher_hp_fraction() {
        let mut first = sample_combatant("First");
        first.current_hp = 40;
        let mut second = sample_combatant("Second");
        second.current_hp = 60;
        let mut state = BattleState::new(first, second);
        state.turn = TURN_LIMIT;
        let outcome = hp_fraction_outcome(&state);
        assert_eq!(outcome.winner, 1);
        assert_eq!(outcome.decided_by, OutcomeKind::HpRemaining);
    }

    #[test]
    fn stalemate_tie_goes_to_the_first_combatant() {
        let first = sample_combatant("First");
        let second = sample_combatant("Second");
        let mut state = BattleState::new(first, second);
        state.turn = TURN_LIMIT;
        let outcome = hp_fraction_outcome(&state);
        assert_eq!(outcome.winner, 0);
        assert_eq!(outcome.loser, 1);
    }

    #[test]
    fn two_splashers_hit_the_turn_cap() {
        let first = combatant_with_moves("Karp A", vec![splash()]);
        let second = combatant_with_moves("Karp B", vec![splash()]);
        let mut state = BattleState::new(first, second);
        let mut rng = SmallRng::seed_from_u64(0);
        let outcome = run_battle(&mut state, &mut rng);
        assert_eq!(outcome.turns, TURN_LIMIT);
        assert_eq!(outcome.decided_by, OutcomeKind::HpRemaining);
        assert_eq!(outcome.winner, 0);
    }
}
