//! Elemental types and the 18x18 effectiveness chart.

/// The eighteen elemental types.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

pub const ALL_TYPES: [Type; 18] = [
    Type::Normal,
    Type::Fire,
    Type::Water,
    Type::Electric,
    Type::Grass,
    Type::Ice,
    Type::Fighting,
    Type::Poison,
    Type::Ground,
    Type::Flying,
    Type::Psychic,
    Type::Bug,
    Type::Rock,
    Type::Ghost,
    Type::Dragon,
    Type::Dark,
    Type::Steel,
    Type::Fairy,
];

impl Type {
    pub fn from_name(name: &str) -> Option<Type> {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

/// Single-type multiplier. Unlisted pairings are neutral (1.0).
pub fn effectiveness(attacking: Type, defending: Type) -> f32 {
    match attacking {
        Type::Normal => match defending {
            Type::Rock | Type::Steel => 0.5,
            Type::Ghost => 0.0,
            _ => 1.0,
        },
        Type::Fire => match defending {
            Type::Fire | Type::Water | Type::Rock | Type::Dragon => 0.5,
            Type::Grass | Type::Ice | Type::Bug | Type::Steel => 2.0,
            _ => 1.0,
        },
        Type::Water => match defending {
            Type::Water | Type::Grass | Type::Dragon => 0.5,
            Type::Fire | Type::Ground | Type::Rock => 2.0,
            _ => 1.0,
        },
        Type::Electric => match defending {
            Type::Electric | Type::Grass | Type::Dragon => 0.5,
            Type::Water | Type::Flying => 2.0,
            Type::Ground => 0.0,
            _ => 1.0,
        },
        Type::Grass => match defending {
            Type::Fire
            | Type::Grass
            | Type::Poison
            | Type::Flying
            | Type::Bug
            | Type::Dragon
            | Type::Steel => 0.5,
            Type::Water | Type::Ground | Type::Rock => 2.0,
            _ => 1.0,
        },
        Type::Ice => match defending {
            Type::Fire | Type::Water | Type::Ice | Type::Steel => 0.5,
            Type::Grass | Type::Ground | Type::Flying | Type::Dragon => 2.0,
            _ => 1.0,
        },
        Type::Fighting => match defending {
            Type::Normal | Type::Ice | Type::Rock | Type::Dark | Type::Steel => 2.0,
            Type::Poison | Type::Flying | Type::Psychic | Type::Bug | Type::Fairy => 0.5,
            Type::Ghost => 0.0,
            _ => 1.0,
        },
        Type::Poison => match defending {
            Type::Grass | Type::Fairy => 2.0,
            Type::Poison | Type::Ground | Type::Rock | Type::Ghost => 0.5,
            Type::Steel => 0.0,
            _ => 1.0,
        },
        Type::Ground => match defending {
            Type::Fire | Type::Electric | Type::Poison | Type::Rock | Type::Steel => 2.0,
            Type::Grass | Type::Bug => 0.5,
            Type::Flying => 0.0,
            _ => 1.0,
        },
        Type::Flying => match defending {
            Type::Grass | Type::Fighting | Type::Bug => 2.0,
            Type::Electric | Type::Rock | Type::Steel => 0.5,
            _ => 1.0,
        },
        Type::Psychic => match defending {
            Type::Fighting | Type::Poison => 2.0,
            Type::Psychic | Type::Steel => 0.5,
            Type::Dark => 0.0,
            _ => 1.0,
        },
        Type::Bug => match defending {
            Type::Grass | Type::Psychic | Type::Dark => 2.0,
            Type::Fire
            | Type::Fighting
            | Type::Poison
            | Type::Flying
            | Type::Ghost
            | Type::Steel
            | Type::Fairy => 0.5,
            _ => 1.0,
        },
        Type::Rock => match defending {
            Type::Fire | Type::Ice | Type::Flying | Type::Bug => 2.0,
            Type::Fighting | Type::Ground | Type::Steel => 0.5,
            _ => 1.0,
        },
        Type::Ghost => match defending {
            Type::Ghost | Type::Psychic => 2.0,
            Type::Dark => 0.5,
            Type::Normal => 0.0,
            _ => 1.0,
        },
        Type::Dragon => match defending {
            Type::Dragon => 2.0,
            Type::Steel => 0.5,
            Type::Fairy => 0.0,
            _ => 1.0,
        },
        Type::Dark => match defending {
            Type::Psychic | Type::Ghost => 2.0,
            Type::Fighting | Type::Dark | Type::Fairy => 0.5,
            _ => 1.0,
        },
        Type::Steel => match defending {
            Type::Rock | Type::Ice | Type::Fairy => 2.0,
            Type::Fire | Type::Water | Type::Electric | Type::Steel => 0.5,
            _ => 1.0,
        },
        Type::Fairy => match defending {
            Type::Fighting | Type::Dragon | Type::Dark => 2.0,
            Type::Fire | Type::Poison | Type::Steel => 0.5,
            _ => 1.0,
        },
    }
}

/// Multiplier against a possibly dual-typed defender: the product of the two
/// single-type lookups, so results span 0, 0.25, 0.5, 1, 2, and 4.
pub fn effectiveness_dual(attacking: Type, primary: Type, secondary: Option<Type>) -> f32 {
    let mut multiplier = effectiveness(attacking, primary);
    if let Some(secondary) = secondary {
        multiplier *= effectiveness(attacking, secondary);
    }
    multiplier
}
