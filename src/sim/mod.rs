pub mod battle;
pub mod damage;
pub mod pokemon;
pub mod stats;
pub mod statuses;

pub use pokemon::Combatant;
