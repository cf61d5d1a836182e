//! Deterministic turn-based Pokémon battle engine.
//!
//! The main entry point is [`engine::BattleEngine`]: resolve two combatant
//! identifiers through a [`engine::CombatantSource`], run the battle to
//! termination with a caller-supplied seed, and get back a
//! [`engine::BattleReport`] with the full action log.

pub mod battle_logger;
pub mod data;
pub mod engine;
pub mod error;
pub mod sim;

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::data::catalog::BuiltinCatalog;
    pub use crate::engine::{BattleEngine, BattleReport, CombatantSource};
    pub use crate::error::SimulateError;
    pub use crate::sim::battle::{
        ActionKind, ActionRecord, BattleState, OutcomeKind, TURN_LIMIT,
    };
    pub use crate::sim::pokemon::{Combatant, MoveSpec, StatBlock, StatusEffectSpec};
    pub use crate::sim::statuses::StatusCondition;
    pub use crate::sim::stats::StatsSet;
}
