//! Structured battle log.
//!
//! Every event in a battle becomes one [`ActionRecord`] in chronological
//! order; the log doubles as the human-readable transcript (each record
//! carries a formatted message) and the machine-readable report
//! ([`BattleLog::to_json`]).

use serde_json::json;

use crate::sim::battle::{ActionKind, ActionRecord};
use crate::sim::pokemon::BattleMove;
use crate::sim::statuses::StatusCondition;

/// Effectiveness phrase for a damage multiplier, or `None` for neutral hits.
pub fn effectiveness_label(multiplier: f32) -> Option<&'static str> {
    if multiplier == 0.0 {
        Some("It has no effect!")
    } else if multiplier > 1.0 {
        Some("It's super effective!")
    } else if multiplier < 1.0 {
        Some("It's not very effective...")
    } else {
        None
    }
}

#[derive(Clone, Debug, Default)]
pub struct BattleLog {
    actions: Vec<ActionRecord>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    #[allow(clippy::too_many_arguments)]
    pub fn attack(
        &mut self,
        turn: u32,
        attacker: &str,
        defender: &str,
        battle_move: &BattleMove,
        damage: u16,
        multiplier: f32,
        remaining: u16,
        max_hp: u16,
    ) {
        let label = effectiveness_label(multiplier);
        let mut message = format!(
            "{attacker} used {}! {defender} took {damage} damage ({remaining}/{max_hp} HP left)",
            battle_move.name
        );
        if let Some(label) = label {
            message.push(' ');
            message.push_str(label);
        }
        self.actions.push(ActionRecord {
            turn,
            actor: attacker.to_string(),
            kind: ActionKind::Attack,
            move_name: Some(battle_move.name.clone()),
            damage: Some(damage),
            effectiveness: label,
            message,
        });
    }

    pub fn status_inflicted(&mut self, turn: u32, target: &str, status: StatusCondition) {
        self.push_status(
            turn,
            target,
            format!("{target} {}!", status.inflicted_message()),
        );
    }

    pub fn status_blocked(&mut self, turn: u32, actor: &str, status: StatusCondition) {
        let message = match status {
            StatusCondition::Sleep => format!("{actor} is fast asleep."),
            StatusCondition::Freeze => format!("{actor} is frozen solid!"),
            StatusCondition::Paralysis => format!("{actor} is paralyzed! It can't move!"),
            _ => format!("{actor} can't move!"),
        };
        self.push_status(turn, actor, message);
    }

    pub fn status_recovered(&mut self, turn: u32, actor: &str, status: StatusCondition) {
        let message = match status {
            StatusCondition::Sleep => format!("{actor} woke up!"),
            StatusCondition::Freeze => format!("{actor} thawed out!"),
            _ => format!("{actor} recovered!"),
        };
        self.push_status(turn, actor, message);
    }

    pub fn residual(
        &mut self,
        turn: u32,
        target: &str,
        status: StatusCondition,
        damage: u16,
        remaining: u16,
        max_hp: u16,
    ) {
        let cause = match status {
            StatusCondition::Burn => "its burn",
            StatusCondition::Poison => "poison",
            _ => "its status",
        };
        self.actions.push(ActionRecord {
            turn,
            actor: target.to_string(),
            kind: ActionKind::Status,
            move_name: None,
            damage: Some(damage),
            effectiveness: None,
            message: format!("{target} is hurt by {cause}! ({remaining}/{max_hp} HP left)"),
        });
    }

    pub fn faint(&mut self, turn: u32, target: &str) {
        self.actions.push(ActionRecord {
            turn,
            actor: target.to_string(),
            kind: ActionKind::Faint,
            move_name: None,
            damage: None,
            effectiveness: None,
            message: format!("{target} fainted!"),
        });
    }

    /// Plain-text transcript, one line per action.
    pub fn summarize(&self) -> Vec<String> {
        self.actions
            .iter()
            .map(|action| format!("[Turn {}] {}", action.turn, action.message))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({ "actions": self.actions })
    }

    fn push_status(&mut self, turn: u32, actor: &str, message: String) {
        self.actions.push(ActionRecord {
            turn,
            actor: actor.to_string(),
            kind: ActionKind::Status,
            move_name: None,
            damage: None,
            effectiveness: None,
            message,
        });
    }
}
