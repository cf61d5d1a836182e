//! Built-in move catalog.
//!
//! Keys are normalized ids (see [`super::normalize_id`]). Secondary statuses
//! use the short ids understood by
//! [`StatusCondition::from_id`](crate::sim::statuses::StatusCondition::from_id).

use phf::phf_map;

use super::normalize_id;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

pub struct SecondaryData {
    /// Trigger chance in percent.
    pub chance: u8,
    pub status: &'static str,
}

pub struct MoveData {
    pub name: &'static str,
    pub move_type: &'static str,
    pub base_power: u16,
    pub category: MoveCategory,
    pub secondary: Option<SecondaryData>,
}

pub fn get_move(name: &str) -> Option<&'static MoveData> {
    MOVES.get(normalize_id(name).as_str())
}

pub static MOVES: phf::Map<&'static str, MoveData> = phf_map! {
    "tackle" => MoveData { name: "Tackle", move_type: "Normal", base_power: 40, category: MoveCategory::Physical, secondary: None },
    "scratch" => MoveData { name: "Scratch", move_type: "Normal", base_power: 40, category: MoveCategory::Physical, secondary: None },
    "quickattack" => MoveData { name: "Quick Attack", move_type: "Normal", base_power: 40, category: MoveCategory::Physical, secondary: None },
    "slash" => MoveData { name: "Slash", move_type: "Normal", base_power: 70, category: MoveCategory::Physical, secondary: None },
    "bodyslam" => MoveData { name: "Body Slam", move_type: "Normal", base_power: 85, category: MoveCategory::Physical, secondary: Some(SecondaryData { chance: 30, status: "par" }) },
    "hyperbeam" => MoveData { name: "Hyper Beam", move_type: "Normal", base_power: 150, category: MoveCategory::Special, secondary: None },
    "splash" => MoveData { name: "Splash", move_type: "Normal", base_power: 0, category: MoveCategory::Status, secondary: None },
    "ember" => MoveData { name: "Ember", move_type: "Fire", base_power: 40, category: MoveCategory::Special, secondary: Some(SecondaryData { chance: 10, status: "brn" }) },
    "flamethrower" => MoveData { name: "Flamethrower", move_type: "Fire", base_power: 90, category: MoveCategory::Special, secondary: Some(SecondaryData { chance: 10, status: "brn" }) },
    "fireblast" => MoveData { name: "Fire Blast", move_type: "Fire", base_power: 110, category: MoveCategory::Special, secondary: Some(SecondaryData { chance: 10, status: "brn" }) },
    "firepunch" => MoveData { name: "Fire Punch", move_type: "Fire", base_power: 75, category: MoveCategory::Physical, secondary: Some(SecondaryData { chance: 10, status: "brn" }) },
    "willowisp" => MoveData { name: "Will-O-Wisp", move_type: "Fire", base_power: 0, category: MoveCategory::Status, secondary: Some(SecondaryData { chance: 85, status: "brn" }) },
    "watergun" => MoveData { name: "Water Gun", move_type: "Water", base_power: 40, category: MoveCategory::Special, secondary: None },
    "surf" => MoveData { name: "Surf", move_type: "Water", base_power: 90, category: MoveCategory::Special, secondary: None },
    "hydropump" => MoveData { name: "Hydro Pump", move_type: "Water", base_power: 110, category: MoveCategory::Special, secondary: None },
    "aquatail" => MoveData { name: "Aqua Tail", move_type: "Water", base_power: 90, category: MoveCategory::Physical, secondary: None },
    "thundershock" => MoveData { name: "Thunder Shock", move_type: "Electric", base_power: 40, category: MoveCategory::Special, secondary: Some(SecondaryData { chance: 10, status: "par" }) },
    "thunderbolt" => MoveData { name: "Thunderbolt", move_type: "Electric", base_power: 90, category: MoveCategory::Special, secondary: Some(SecondaryData { chance: 10, status: "par" }) },
    "thunder" => MoveData { name: "Thunder", move_type: "Electric", base_power: 110, category: MoveCategory::Special, secondary: Some(SecondaryData { chance: 30, status: "par" }) },
    "thunderwave" => MoveData { name: "Thunder Wave", move_type: "Electric", base_power: 0, category: MoveCategory::Status, secondary: Some(SecondaryData { chance: 100, status: "par" }) },
    "vinewhip" => MoveData { name: "Vine Whip", move_type: "Grass", base_power: 45, category: MoveCategory::Physical, secondary: None },
    "razorleaf" => MoveData { name: "Razor Leaf", move_type: "Grass", base_power: 55, category: MoveCategory::Physical, secondary: None },
    "solarbeam" => MoveData { name: "Solar Beam", move_type: "Grass", base_power: 120, category: MoveCategory::Special, secondary: None },
    "sleeppowder" => MoveData { name: "Sleep Powder", move_type: "Grass", base_power: 0, category: MoveCategory::Status, secondary: Some(SecondaryData { chance: 75, status: "slp" }) },
    "icebeam" => MoveData { name: "Ice Beam", move_type: "Ice", base_power: 90, category: MoveCategory::Special, secondary: Some(SecondaryData { chance: 10, status: "frz" }) },
    "blizzard" => MoveData { name: "Blizzard", move_type: "Ice", base_power: 110, category: MoveCategory::Special, secondary: Some(SecondaryData { chance: 10, status: "frz" }) },
    "karatechop" => MoveData { name: "Karate Chop", move_type: "Fighting", base_power: 50, category: MoveCategory::Physical, secondary: None },
    "crosschop" => MoveData { name: "Cross Chop", move_type: "Fighting", base_power: 100, category: MoveCategory::Physical, secondary: None },
    "sludgebomb" => MoveData { name: "Sludge Bomb", move_type: "Poison", base_power: 90, category: MoveCategory::Special, secondary: Some(SecondaryData { chance: 30, status: "psn" }) },
    "toxic" => MoveData { name: "Toxic", move_type: "Poison", base_power: 0, category: MoveCategory::Status, secondary: Some(SecondaryData { chance: 90, status: "psn" }) },
    "earthquake" => MoveData { name: "Earthquake", move_type: "Ground", base_power: 100, category: MoveCategory::Physical, secondary: None },
    "dig" => MoveData { name: "Dig", move_type: "Ground", base_power: 80, category: MoveCategory::Physical, secondary: None },
    "wingattack" => MoveData { name: "Wing Attack", move_type: "Flying", base_power: 60, category: MoveCategory::Physical, secondary: None },
    "psychic" => MoveData { name: "Psychic", move_type: "Psychic", base_power: 90, category: MoveCategory::Special, secondary: None },
    "confusion" => MoveData { name: "Confusion", move_type: "Psychic", base_power: 50, category: MoveCategory::Special, secondary: None },
    "hypnosis" => MoveData { name: "Hypnosis", move_type: "Psychic", base_power: 0, category: MoveCategory::Status, secondary: Some(SecondaryData { chance: 60, status: "slp" }) },
    "rockthrow" => MoveData { name: "Rock Throw", move_type: "Rock", base_power: 50, category: MoveCategory::Physical, secondary: None },
    "rockslide" => MoveData { name: "Rock Slide", move_type: "Rock", base_power: 75, category: MoveCategory::Physical, secondary: None },
    "shadowball" => MoveData { name: "Shadow Ball", move_type: "Ghost", base_power: 80, category: MoveCategory::Special, secondary: None },
    "lick" => MoveData { name: "Lick", move_type: "Ghost", base_power: 30, category: MoveCategory::Physical, secondary: Some(SecondaryData { chance: 30, status: "par" }) },
    "dragonclaw" => MoveData { name: "Dragon Claw", move_type: "Dragon", base_power: 80, category: MoveCategory::Physical, secondary: None },
    "bite" => MoveData { name: "Bite", move_type: "Dark", base_power: 60, category: MoveCategory::Physical, secondary: None },
    "crunch" => MoveData { name: "Crunch", move_type: "Dark", base_power: 80, category: MoveCategory::Physical, secondary: None },
    "irontail" => MoveData { name: "Iron Tail", move_type: "Steel", base_power: 100, category: MoveCategory::Physical, secondary: None },
};
