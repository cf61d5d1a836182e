//! Public error taxonomy for battle simulation.

use thiserror::Error;

/// Errors surfaced by [`BattleEngine::simulate`](crate::engine::BattleEngine::simulate).
///
/// Either variant means no battle ran and no report exists. The stalemate
/// fallback is not an error; it is reported through
/// [`OutcomeKind::HpRemaining`](crate::sim::battle::OutcomeKind).
#[derive(Debug, Error)]
pub enum SimulateError {
    /// The data provider could not resolve the identifier.
    #[error("combatant '{0}' could not be resolved")]
    Resolution(String),
    /// Resolved data is structurally invalid.
    #[error("invalid combatant data for '{name}': {reason}")]
    Validation { name: String, reason: String },
}
