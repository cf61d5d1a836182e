//! Built-in species catalog: the first-generation roster the original demos
//! battled with, keyed by normalized name.

use phf::phf_map;

pub struct BaseStats {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

pub struct SpeciesData {
    pub name: &'static str,
    pub dex: u16,
    pub base_stats: BaseStats,
    pub types: &'static [&'static str],
    pub ability: &'static str,
    pub moves: &'static [&'static str],
}

pub static POKEDEX: phf::Map<&'static str, SpeciesData> = phf_map! {
    "bulbasaur" => SpeciesData {
        name: "Bulbasaur", dex: 1,
        base_stats: BaseStats { hp: 45, atk: 49, def: 49, spa: 65, spd: 65, spe: 45 },
        types: &["Grass", "Poison"], ability: "Overgrow",
        moves: &["vinewhip", "razorleaf", "sludgebomb", "tackle"],
    },
    "venusaur" => SpeciesData {
        name: "Venusaur", dex: 3,
        base_stats: BaseStats { hp: 80, atk: 82, def: 83, spa: 100, spd: 100, spe: 80 },
        types: &["Grass", "Poison"], ability: "Overgrow",
        moves: &["razorleaf", "solarbeam", "sludgebomb", "bodyslam"],
    },
    "charmander" => SpeciesData {
        name: "Charmander", dex: 4,
        base_stats: BaseStats { hp: 39, atk: 52, def: 43, spa: 60, spd: 50, spe: 65 },
        types: &["Fire"], ability: "Blaze",
        moves: &["scratch", "ember", "slash", "dig"],
    },
    "charizard" => SpeciesData {
        name: "Charizard", dex: 6,
        base_stats: BaseStats { hp: 78, atk: 84, def: 78, spa: 109, spd: 85, spe: 100 },
        types: &["Fire", "Flying"], ability: "Blaze",
        moves: &["flamethrower", "wingattack", "slash", "dragonclaw"],
    },
    "squirtle" => SpeciesData {
        name: "Squirtle", dex: 7,
        base_stats: BaseStats { hp: 44, atk: 48, def: 65, spa: 50, spd: 64, spe: 43 },
        types: &["Water"], ability: "Torrent",
        moves: &["tackle", "watergun", "bite", "aquatail"],
    },
    "blastoise" => SpeciesData {
        name: "Blastoise", dex: 9,
        base_stats: BaseStats { hp: 79, atk: 83, def: 100, spa: 85, spd: 105, spe: 78 },
        types: &["Water"], ability: "Torrent",
        moves: &["surf", "hydropump", "bite", "icebeam"],
    },
    "pikachu" => SpeciesData {
        name: "Pikachu", dex: 25,
        base_stats: BaseStats { hp: 35, atk: 55, def: 40, spa: 50, spd: 50, spe: 90 },
        types: &["Electric"], ability: "Static",
        moves: &["thundershock", "thunderbolt", "quickattack", "thunderwave"],
    },
    "raichu" => SpeciesData {
        name: "Raichu", dex: 26,
        base_stats: BaseStats { hp: 60, atk: 90, def: 55, spa: 90, spd: 80, spe: 110 },
        types: &["Electric"], ability: "Static",
        moves: &["thunderbolt", "thunder", "quickattack", "bodyslam"],
    },
    "ninetales" => SpeciesData {
        name: "Ninetales", dex: 38,
        base_stats: BaseStats { hp: 73, atk: 76, def: 75, spa: 81, spd: 100, spe: 100 },
        types: &["Fire"], ability: "Flash Fire",
        moves: &["flamethrower", "fireblast", "quickattack", "willowisp"],
    },
    "arcanine" => SpeciesData {
        name: "Arcanine", dex: 59,
        base_stats: BaseStats { hp: 90, atk: 110, def: 80, spa: 100, spd: 80, spe: 95 },
        types: &["Fire"], ability: "Intimidate",
        moves: &["flamethrower", "crunch", "bodyslam", "dig"],
    },
    "alakazam" => SpeciesData {
        name: "Alakazam", dex: 65,
        base_stats: BaseStats { hp: 55, atk: 50, def: 45, spa: 135, spd: 95, spe: 120 },
        types: &["Psychic"], ability: "Synchronize",
        moves: &["psychic", "confusion", "shadowball", "hypnosis"],
    },
    "machamp" => SpeciesData {
        name: "Machamp", dex: 68,
        base_stats: BaseStats { hp: 90, atk: 130, def: 80, spa: 65, spd: 85, spe: 55 },
        types: &["Fighting"], ability: "Guts",
        moves: &["crosschop", "karatechop", "earthquake", "rockslide"],
    },
    "golem" => SpeciesData {
        name: "Golem", dex: 76,
        base_stats: BaseStats { hp: 80, atk: 120, def: 130, spa: 55, spd: 65, spe: 45 },
        types: &["Rock", "Ground"], ability: "Sturdy",
        moves: &["earthquake", "rockslide", "dig", "tackle"],
    },
    "gengar" => SpeciesData {
        name: "Gengar", dex: 94,
        base_stats: BaseStats { hp: 60, atk: 65, def: 60, spa: 130, spd: 75, spe: 110 },
        types: &["Ghost", "Poison"], ability: "Levitate",
        moves: &["shadowball", "sludgebomb", "psychic", "hypnosis"],
    },
    "onix" => SpeciesData {
        name: "Onix", dex: 95,
        base_stats: BaseStats { hp: 35, atk: 45, def: 160, spa: 30, spd: 45, spe: 70 },
        types: &["Rock", "Ground"], ability: "Rock Head",
        moves: &["rockthrow", "rockslide", "dig", "irontail"],
    },
    "starmie" => SpeciesData {
        name: "Starmie", dex: 121,
        base_stats: BaseStats { hp: 60, atk: 75, def: 85, spa: 100, spd: 85, spe: 115 },
        types: &["Water", "Psychic"], ability: "Natural Cure",
        moves: &["surf", "psychic", "icebeam", "watergun"],
    },
    "magikarp" => SpeciesData {
        name: "Magikarp", dex: 129,
        base_stats: BaseStats { hp: 20, atk: 10, def: 55, spa: 15, spd: 20, spe: 80 },
        types: &["Water"], ability: "Swift Swim",
        moves: &["splash"],
    },
    "gyarados" => SpeciesData {
        name: "Gyarados", dex: 130,
        base_stats: BaseStats { hp: 95, atk: 125, def: 79, spa: 60, spd: 100, spe: 81 },
        types: &["Water", "Flying"], ability: "Intimidate",
        moves: &["aquatail", "crunch", "earthquake", "icebeam"],
    },
    "lapras" => SpeciesData {
        name: "Lapras", dex: 131,
        base_stats: BaseStats { hp: 130, atk: 85, def: 80, spa: 85, spd: 95, spe: 60 },
        types: &["Water", "Ice"], ability: "Water Absorb",
        moves: &["surf", "icebeam", "bodyslam", "blizzard"],
    },
    "jolteon" => SpeciesData {
        name: "Jolteon", dex: 135,
        base_stats: BaseStats { hp: 65, atk: 65, def: 60, spa: 110, spd: 95, spe: 130 },
        types: &["Electric"], ability: "Volt Absorb",
        moves: &["thunderbolt", "thundershock", "quickattack", "thunderwave"],
    },
    "snorlax" => SpeciesData {
        name: "Snorlax", dex: 143,
        base_stats: BaseStats { hp: 160, atk: 110, def: 65, spa: 65, spd: 110, spe: 30 },
        types: &["Normal"], ability: "Immunity",
        moves: &["bodyslam", "hyperbeam", "earthquake", "crunch"],
    },
    "dragonite" => SpeciesData {
        name: "Dragonite", dex: 149,
        base_stats: BaseStats { hp: 91, atk: 134, def: 95, spa: 100, spd: 100, spe: 80 },
        types: &["Dragon", "Flying"], ability: "Multiscale",
        moves: &["dragonclaw", "wingattack", "firepunch", "hyperbeam"],
    },
    "mewtwo" => SpeciesData {
        name: "Mewtwo", dex: 150,
        base_stats: BaseStats { hp: 106, atk: 110, def: 90, spa: 154, spd: 90, spe: 130 },
        types: &["Psychic"], ability: "Pressure",
        moves: &["psychic", "shadowball", "icebeam", "hyperbeam"],
    },
};
