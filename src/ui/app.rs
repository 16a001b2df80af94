//! Terminal front end state: maps keys to rule operations and turns their
//! results into adventure log lines.

use super::combat_effects::{EffectType, VisualEffect};
use crossterm::event::KeyCode;
use darkfort::catalog::SHOP_ITEMS;
use darkfort::combat::{AttackResult, CombatOutcome, Retaliation, SpecialOutcome, VictoryReport};
use darkfort::progression::LevelUpReport;
use darkfort::{
    attack, buy, engage, explore_room, flee, leave_shop, level_up, sell, toggle_equip, use_potion,
    Dice, Ending, GameError, GameSession, Phase, RoomEvent,
};
use ratatui::style::Color;
use std::collections::VecDeque;

const LOG_CAPACITY: usize = 200;
const FLASH_SECONDS: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Good,
    Bad,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub message: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopTab {
    Buy,
    Sell,
}

/// Which list the arrow keys move through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Actions,
    Inventory,
}

pub struct App<D: Dice> {
    pub session: GameSession,
    dice: D,
    pub log: VecDeque<LogEntry>,
    pub effects: Vec<VisualEffect>,
    pub focus: Focus,
    pub inventory_cursor: usize,
    pub shop_tab: ShopTab,
    pub shop_cursor: usize,
    pub should_quit: bool,
    needs_save: bool,
}

impl<D: Dice> App<D> {
    pub fn new(session: GameSession, dice: D) -> Self {
        let mut app = Self {
            session,
            dice,
            log: VecDeque::new(),
            effects: Vec::new(),
            focus: Focus::Actions,
            inventory_cursor: 0,
            shop_tab: ShopTab::Buy,
            shop_cursor: 0,
            should_quit: false,
            needs_save: false,
        };
        app.introduce();
        app
    }

    fn introduce(&mut self) {
        let c = &self.session.character;
        let intro = format!(
            "{} the {} enters the Dark Fort with {} silver.",
            c.name, c.profession, c.silver
        );
        let gear = format!(
            "Your gear: {}.",
            c.inventory
                .iter()
                .map(|(name, count)| if count > 1 {
                    format!("{} x{}", name, count)
                } else {
                    name.to_string()
                })
                .collect::<Vec<_>>()
                .join(", ")
        );
        self.push_log(intro, Tone::Info);
        self.push_log(gear, Tone::Info);
        self.after_action(false);
    }

    pub fn push_log(&mut self, message: impl Into<String>, tone: Tone) {
        self.log.push_back(LogEntry {
            message: message.into(),
            tone,
        });
        while self.log.len() > LOG_CAPACITY {
            self.log.pop_front();
        }
    }

    /// True once after the challenge book changed in a way worth saving.
    pub fn take_needs_save(&mut self) -> bool {
        std::mem::take(&mut self.needs_save)
    }

    /// Advance visual effects by `delta` seconds.
    pub fn tick(&mut self, delta: f64) {
        self.effects.retain_mut(|effect| effect.update(delta));
    }

    /// Border color override for a panel while its effect is active.
    pub fn flash_color(&self, effect_type: EffectType) -> Option<Color> {
        self.effects
            .iter()
            .rev()
            .find(|e| e.effect_type == effect_type)
            .map(VisualEffect::border_color)
    }

    /// Inventory item names in display order.
    pub fn inventory_names(&self) -> Vec<String> {
        self.session
            .character
            .inventory
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        let was_over = self.session.is_over();
        if self.focus == Focus::Inventory {
            self.handle_inventory_key(code);
        } else if code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        } else {
            match self.session.phase {
                Phase::Exploring => self.handle_exploring_key(code),
                Phase::PreCombatChoice => self.handle_encounter_key(code),
                Phase::InCombat => self.handle_combat_key(code),
                Phase::InShop => self.handle_shop_key(code),
                Phase::Victory | Phase::Defeat => {
                    if code == KeyCode::Char('n') {
                        self.new_game();
                        return;
                    }
                }
            }
        }
        self.after_action(was_over);
    }

    fn handle_exploring_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('e') => self.explore(),
            KeyCode::Char('p') => self.drink_potion(),
            KeyCode::Char('l') => self.level_up(),
            KeyCode::Char('i') => self.open_inventory(),
            _ => {}
        }
    }

    fn handle_encounter_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') => {
                match engage(&mut self.session) {
                    Ok(monster) => self.push_log(
                        format!("You engage the {} ({} hp).", monster.name(), monster.current_hp),
                        Tone::Info,
                    ),
                    Err(e) => return self.report_error(e),
                }
                self.attack();
            }
            KeyCode::Char('f') => self.flee(),
            KeyCode::Char('i') => self.open_inventory(),
            _ => {}
        }
    }

    fn handle_combat_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') => self.attack(),
            KeyCode::Char('f') => self.flee(),
            KeyCode::Char('p') => self.drink_potion(),
            _ => {}
        }
    }

    fn handle_shop_key(&mut self, code: KeyCode) {
        let len = self.shop_len();
        match code {
            KeyCode::Tab => {
                self.shop_tab = match self.shop_tab {
                    ShopTab::Buy => ShopTab::Sell,
                    ShopTab::Sell => ShopTab::Buy,
                };
                self.shop_cursor = 0;
            }
            KeyCode::Up => self.shop_cursor = self.shop_cursor.saturating_sub(1),
            KeyCode::Down if len > 0 => self.shop_cursor = (self.shop_cursor + 1).min(len - 1),
            KeyCode::Enter => self.trade(),
            KeyCode::Char('x') => match leave_shop(&mut self.session) {
                Ok(()) => self.push_log(
                    "You leave the peddler behind and continue into the darkness.",
                    Tone::Info,
                ),
                Err(e) => self.report_error(e),
            },
            KeyCode::Char('l') => self.level_up(),
            KeyCode::Char('i') => self.open_inventory(),
            _ => {}
        }
    }

    fn handle_inventory_key(&mut self, code: KeyCode) {
        let names = self.inventory_names();
        match code {
            KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('q') => self.focus = Focus::Actions,
            KeyCode::Up => self.inventory_cursor = self.inventory_cursor.saturating_sub(1),
            KeyCode::Down if !names.is_empty() => {
                self.inventory_cursor = (self.inventory_cursor + 1).min(names.len() - 1)
            }
            KeyCode::Enter => {
                let Some(name) = names.get(self.inventory_cursor) else {
                    return;
                };
                match toggle_equip(&mut self.session, name) {
                    Ok(change) => match change.equipped {
                        Some(item) => self.push_log(format!("You equip the {}.", item), Tone::Good),
                        None => self.push_log(
                            format!("You stow the {}.", change.previous.unwrap_or_default()),
                            Tone::Info,
                        ),
                    },
                    Err(e) => self.report_error(e),
                }
            }
            _ => {}
        }
    }

    fn open_inventory(&mut self) {
        self.focus = Focus::Inventory;
        self.inventory_cursor = 0;
    }

    pub fn shop_len(&self) -> usize {
        match self.shop_tab {
            ShopTab::Buy => SHOP_ITEMS.len(),
            ShopTab::Sell => self.session.character.inventory.iter().count(),
        }
    }

    fn trade(&mut self) {
        match self.shop_tab {
            ShopTab::Buy => {
                let Some(item) = SHOP_ITEMS.get(self.shop_cursor) else {
                    return;
                };
                match buy(&mut self.session, item.name) {
                    Ok(purchase) => self.push_log(
                        format!(
                            "You bought a {} ({} silver left).",
                            purchase.item.name, purchase.silver_left
                        ),
                        Tone::Good,
                    ),
                    Err(e) => self.report_error(e),
                }
            }
            ShopTab::Sell => {
                let names = self.inventory_names();
                let Some(name) = names.get(self.shop_cursor) else {
                    return;
                };
                match sell(&mut self.session, name) {
                    Ok(sale) => {
                        let mut message = format!("You sold a {} for {} silver.", sale.item, sale.credited);
                        if sale.unequipped {
                            message.push_str(" It is no longer equipped.");
                        }
                        self.push_log(message, Tone::Info);
                    }
                    Err(e) => self.report_error(e),
                }
                let len = self.shop_len();
                self.shop_cursor = self.shop_cursor.min(len.saturating_sub(1));
            }
        }
    }

    fn explore(&mut self) {
        let event = match explore_room(&mut self.session, &mut self.dice) {
            Ok(event) => event,
            Err(e) => return self.report_error(e),
        };
        let room = self.session.rooms_explored;
        let (message, tone) = match event {
            RoomEvent::BossLair(boss) => (
                format!(
                    "Final chamber: the gates creak open, revealing the {} on his throne!",
                    boss.name
                ),
                Tone::Bad,
            ),
            RoomEvent::Empty => (
                format!("Room {}: empty, save for dust and cobwebs.", room),
                Tone::Info,
            ),
            RoomEvent::TrapAvoided => (
                format!("Room {}: you spot a pit trap and use your rope to cross it.", room),
                Tone::Good,
            ),
            RoomEvent::Trap { damage } => (
                format!("Room {}: you fall into a pit trap, taking {} damage!", room, damage),
                Tone::Bad,
            ),
            RoomEvent::WeakMonster(m) => (format!("Room {}: a {} appears!", room, m.name), Tone::Bad),
            RoomEvent::ToughMonster(m) => (
                format!("Room {}: a fearsome {} blocks your path!", room, m.name),
                Tone::Bad,
            ),
            RoomEvent::Shop => {
                self.shop_tab = ShopTab::Buy;
                self.shop_cursor = 0;
                (
                    format!("Room {}: a mysterious peddler offers their wares.", room),
                    Tone::Good,
                )
            }
        };
        self.push_log(message, tone);
    }

    fn attack(&mut self) {
        let monster = self
            .session
            .current_monster
            .map(|m| m.name())
            .unwrap_or("monster");
        match attack(&mut self.session, &mut self.dice) {
            Ok(result) => self.narrate_attack(monster, result),
            Err(e) => self.report_error(e),
        }
    }

    fn narrate_attack(&mut self, monster: &str, result: AttackResult) {
        if result.hit {
            self.push_log(
                format!(
                    "You hit the {} for {} damage. It has {} hp left.",
                    monster, result.damage, result.monster_hp
                ),
                Tone::Good,
            );
        } else {
            self.push_log(format!("You missed the {}.", monster), Tone::Info);
        }
        if let Some(retaliation) = result.retaliation {
            self.narrate_retaliation(monster, retaliation);
        }
        if let CombatOutcome::Victory(report) = result.outcome {
            self.narrate_victory(report);
        }
    }

    fn narrate_retaliation(&mut self, monster: &str, retaliation: Retaliation) {
        let message = if retaliation.damage == 0 {
            format!("The {} strikes, but your armor holds.", monster)
        } else {
            format!("The {} retaliates, hitting you for {} damage.", monster, retaliation.damage)
        };
        self.push_log(message, Tone::Bad);
    }

    fn narrate_victory(&mut self, report: VictoryReport) {
        self.push_log(
            format!(
                "You defeated the {}! +{} points, +{} silver.",
                report.monster, report.points_gained, report.silver_found
            ),
            Tone::Good,
        );
        if let Some(item) = report.loot {
            self.push_log(format!("The monster dropped a {}!", item), Tone::Good);
        }
        if report.bonus_potion {
            self.push_log("The monster dropped a potion!", Tone::Good);
        }
        match report.special {
            Some(SpecialOutcome::InstantDeath) => {
                self.push_log("Its dying gaze meets yours...", Tone::Bad)
            }
            Some(SpecialOutcome::FreeLevelUp) => self.push_log(
                format!(
                    "You drink the basilisk's blood and grow stronger: level {}!",
                    self.session.character.level
                ),
                Tone::Good,
            ),
            None => {}
        }
    }

    fn flee(&mut self) {
        match flee(&mut self.session, &mut self.dice) {
            Ok(result) => self.push_log(
                format!("You flee, taking {} damage.", result.damage),
                Tone::Bad,
            ),
            Err(e) => self.report_error(e),
        }
    }

    fn drink_potion(&mut self) {
        let monster = self.session.current_monster.map(|m| m.name());
        match use_potion(&mut self.session, &mut self.dice) {
            Ok(result) => {
                self.push_log(
                    format!(
                        "You drink a potion, restoring {} health. You now have {} hp.",
                        result.healed, result.hp
                    ),
                    Tone::Good,
                );
                if let (Some(monster), Some(retaliation)) = (monster, result.retaliation) {
                    self.narrate_retaliation(monster, retaliation);
                }
            }
            Err(e) => self.report_error(e),
        }
    }

    fn level_up(&mut self) {
        match level_up(&mut self.session) {
            Ok(report) => self.narrate_level_up(report),
            Err(e) => self.report_error(e),
        }
    }

    fn narrate_level_up(&mut self, report: LevelUpReport) {
        let mut message = format!(
            "LEVEL UP! You are now level {}. Defense and damage +1",
            report.new_level
        );
        if report.die_upgraded {
            message.push_str(", and your bare-handed die grows");
        }
        message.push('.');
        self.push_log(message, Tone::Good);
    }

    fn report_error(&mut self, error: GameError) {
        self.push_log(capitalize(&error.to_string()), Tone::Bad);
    }

    fn narrate_ending(&mut self) {
        let points = self.session.character.points;
        let (message, tone) = match &self.session.ending {
            Some(Ending::BossSlain) => (
                format!("VICTORY! You conquered the Dark Fort. Final score: {}.", points),
                Tone::Good,
            ),
            Some(Ending::SlainBy(monster)) => {
                (format!("GAME OVER: you were slain by a {}.", monster), Tone::Bad)
            }
            Some(Ending::Trap) => ("GAME OVER: you succumbed to a trap.".to_string(), Tone::Bad),
            Some(Ending::FledToDeath) => (
                "GAME OVER: you died while trying to flee.".to_string(),
                Tone::Bad,
            ),
            Some(Ending::Petrified(monster)) => (
                format!("GAME OVER: the {} turned you to stone.", monster),
                Tone::Bad,
            ),
            None => return,
        };
        self.push_log(message, tone);
        self.push_log("Press n for a new adventure or q to quit.", Tone::Info);
    }

    /// Turn queued events into effects, challenge toasts and the ending text.
    fn after_action(&mut self, was_over: bool) {
        for event in self.session.take_events() {
            if let Some(effect_type) = EffectType::from_event(event) {
                self.effects.push(VisualEffect::new(effect_type, FLASH_SECONDS));
            }
        }
        for def in self.session.take_completed_challenges() {
            self.push_log(format!("Challenge complete: {}!", def.name), Tone::Good);
            self.needs_save = true;
        }
        if self.session.is_over() && !was_over {
            self.narrate_ending();
            self.needs_save = true;
        }
    }

    fn new_game(&mut self) {
        self.session.restart(&mut self.dice);
        self.log.clear();
        self.effects.clear();
        self.focus = Focus::Actions;
        self.shop_cursor = 0;
        self.inventory_cursor = 0;
        self.introduce();
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use darkfort::character::{Character, Inventory};
    use darkfort::dice::ScriptedDice;
    use darkfort::Rules;

    fn app(rolls: Vec<u32>) -> App<ScriptedDice> {
        let mut c = Character::new("Tester", "Hunter");
        c.silver = 12;
        c.inventory = Inventory::from_items(["Sword", "Potion"]);
        c.equipped_weapon = Some("Sword".to_string());
        App::new(
            GameSession::with_character(c, Rules::default()),
            ScriptedDice::new(rolls),
        )
    }

    fn last_message(app: &App<ScriptedDice>) -> &str {
        app.log.back().map(|e| e.message.as_str()).unwrap_or("")
    }

    #[test]
    fn test_intro_lists_gear() {
        let app = app(vec![]);
        assert_eq!(app.log.len(), 2);
        assert_eq!(last_message(&app), "Your gear: Potion, Sword.");
    }

    #[test]
    fn test_new_run_start_cue_flashes_room() {
        let mut dice = ScriptedDice::new([]);
        let session = GameSession::new(Rules::default(), Default::default(), &mut dice);
        let mut app = App::new(session, dice);
        assert!(app.flash_color(EffectType::NewRun).is_some());
        assert!(app.session.take_events().is_empty());

        app.tick(1.0);
        assert!(app.flash_color(EffectType::NewRun).is_none());
    }

    #[test]
    fn test_explore_key_logs_room() {
        let mut app = app(vec![1]);
        app.handle_key(KeyCode::Char('e'));
        assert_eq!(last_message(&app), "Room 1: empty, save for dust and cobwebs.");
        assert_eq!(app.session.phase, Phase::Exploring);
    }

    #[test]
    fn test_rejected_operation_is_logged() {
        let mut app = app(vec![]);
        app.handle_key(KeyCode::Char('l'));
        assert_eq!(
            last_message(&app),
            "Not enough points to level up: have 0, need 10"
        );
        assert_eq!(app.log.back().map(|e| e.tone), Some(Tone::Bad));
    }

    #[test]
    fn test_attack_from_encounter_engages_and_swings() {
        // room 4, weak monster 3 (Goblin), hit 6, damage 6 kills, silver 1
        let mut app = app(vec![4, 3, 6, 6, 1]);
        app.handle_key(KeyCode::Char('e'));
        assert_eq!(app.session.phase, Phase::PreCombatChoice);
        app.handle_key(KeyCode::Char('a'));
        assert_eq!(app.session.phase, Phase::Exploring);
        assert!(app
            .log
            .iter()
            .any(|e| e.message.starts_with("You defeated the Goblin!")));
        assert!(app.flash_color(EffectType::MonsterHit).is_some());
        app.tick(1.0);
        assert!(app.flash_color(EffectType::MonsterHit).is_none());
    }

    #[test]
    fn test_shop_buy_and_leave() {
        let mut app = app(vec![6]);
        app.handle_key(KeyCode::Char('e'));
        assert_eq!(app.session.phase, Phase::InShop);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session.character.inventory.count("Potion"), 2);
        assert_eq!(app.session.character.silver, 7);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.shop_tab, ShopTab::Sell);
        app.handle_key(KeyCode::Char('x'));
        assert_eq!(app.session.phase, Phase::Exploring);
    }

    #[test]
    fn test_inventory_toggle() {
        let mut app = app(vec![]);
        app.handle_key(KeyCode::Char('i'));
        assert_eq!(app.focus, Focus::Inventory);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert!(app.session.character.equipped_weapon.is_none());
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.focus, Focus::Actions);
    }

    #[test]
    fn test_death_narrates_and_new_game_restarts() {
        let mut app = app(vec![3, 4]);
        app.session.character.hp = 3;
        app.handle_key(KeyCode::Char('e'));
        assert_eq!(app.session.phase, Phase::Defeat);
        assert!(app.take_needs_save());
        assert!(!app.take_needs_save());
        assert!(app
            .log
            .iter()
            .any(|e| e.message == "GAME OVER: you succumbed to a trap."));

        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.session.phase, Phase::Exploring);
        assert_eq!(app.log.len(), 2);
        assert!(app.flash_color(EffectType::NewRun).is_some());
    }

    #[test]
    fn test_quit_key() {
        let mut app = app(vec![]);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("cannot explore while dead"), "Cannot explore while dead");
        assert_eq!(capitalize(""), "");
    }
}
