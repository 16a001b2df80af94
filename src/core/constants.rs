// Starting character
pub const STARTING_HP: u32 = 20;
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_SILVER_BASE: u32 = 25;
pub const STARTING_SILVER_DIE: u32 = 6;
pub const EXTRA_POTION_CHANCE: f64 = 0.5;
pub const STARTING_ROPE_CHANCE: f64 = 0.3;

// Room rolls
pub const ROOM_DIE: u32 = 6;
pub const TRAP_DAMAGE_DIE: u32 = 4;

// Combat
pub const ATTACK_DIE: u32 = 6;
pub const FLEE_DAMAGE_DIE: u32 = 4;
pub const POTION_HEAL_DIE: u32 = 6;
pub const POTION_HEAL_DICE_COUNT: u32 = 2;

// Victory rewards: silver = d6 + difficulty, loot chance = base + difficulty * step
pub const SILVER_FOUND_DIE: u32 = 6;
pub const LOOT_BASE_CHANCE: f64 = 0.2;
pub const LOOT_CHANCE_PER_DIFFICULTY: f64 = 0.1;
pub const BONUS_POTION_CHANCE: f64 = 0.3;

// Post-victory specials
pub const SPECIAL_EFFECT_DIE: u32 = 6;
pub const PETRIFYING_GAZE_MAX_ROLL: u32 = 1;
pub const BASILISK_BLOOD_MAX_ROLL: u32 = 2;

// Progression
pub const LEVEL_UP_THRESHOLD: u32 = 10;
pub const BOSS_LEVEL: u32 = 2;
pub const BOSS_RETRIGGER_CHANCE: f64 = 0.15;
pub const DEFENSE_PER_LEVEL: u32 = 1;
pub const DAMAGE_BONUS_PER_LEVEL: u32 = 1;

// Economy
pub const SELL_FALLBACK_CREDIT: u32 = 2;

// Item names the rules refer to directly
pub const POTION: &str = "Potion";
pub const ROPE: &str = "Rope";
pub const STARTING_WEAPON: &str = "Sword";
