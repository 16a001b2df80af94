//! Names and professions for freshly rolled characters.

pub static PLAYER_NAMES: [&str; 6] = [
    "Vytautas",
    "Gediminas",
    "Algirdas",
    "Kęstutis",
    "Jogaila",
    "Mindaugas",
];

pub static PLAYER_PROFESSIONS: [&str; 6] = [
    "Blacksmith",
    "Hunter",
    "Healer",
    "Merchant",
    "Warrior",
    "Farmer",
];
