use super::app::{App, ShopTab};
use super::combat_effects::EffectType;
use darkfort::catalog::{MonsterTemplate, SHOP_ITEMS};
use darkfort::economy::sell_price;
use darkfort::{Dice, Ending, Phase, Snapshot};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draws whatever the current room holds: a monster, the shop, or the end screen
pub fn draw_room_panel<D: Dice>(frame: &mut Frame, area: Rect, app: &App<D>, snapshot: &Snapshot) {
    let border = app
        .flash_color(EffectType::MonsterHit)
        .or_else(|| app.flash_color(EffectType::NewRun))
        .unwrap_or(Color::White);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", title(snapshot)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match snapshot.phase {
        Phase::Exploring => exploring_lines(snapshot),
        Phase::PreCombatChoice => match &snapshot.encounter {
            Some(monster) => monster_lines(monster, monster.max_hp, true),
            None => Vec::new(),
        },
        Phase::InCombat => match &snapshot.current_monster {
            Some(monster) => monster_lines(&monster.template, monster.current_hp, false),
            None => Vec::new(),
        },
        Phase::InShop => shop_lines(app, snapshot),
        Phase::Victory | Phase::Defeat => ending_lines(snapshot),
    };

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn title(snapshot: &Snapshot) -> &'static str {
    match snapshot.phase {
        Phase::Exploring => "The Catacomb",
        Phase::PreCombatChoice => "Encounter",
        Phase::InCombat => "Combat",
        Phase::InShop => "Peddler's Wares",
        Phase::Victory => "Victory",
        Phase::Defeat => "Game Over",
    }
}

fn exploring_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from("The air is thick with dust and decay."),
        Line::from("A single door leads deeper into the Dark Fort."),
        Line::from(""),
    ];
    if snapshot.can_level_up {
        lines.push(Line::from(Span::styled(
            "You have enough points to level up (L).",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    }
    lines
}

fn monster_lines(monster: &MonsterTemplate, hp: u32, choosing: bool) -> Vec<Line<'static>> {
    let name_style = if monster.is_boss() {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    };
    let mut lines = vec![
        Line::from(Span::styled(monster.name.to_string(), name_style)),
        Line::from(format!(
            "HP: {} / {} | Damage: {} | Hits on {}+",
            hp, monster.max_hp, monster.damage, monster.difficulty
        )),
    ];
    if let Some(special) = monster.special {
        lines.push(Line::from(Span::styled(
            special.description(),
            Style::default().fg(Color::Yellow),
        )));
    }
    lines.push(Line::from(""));
    if choosing {
        lines.push(Line::from("Attack (A) or flee (F)?"));
    }
    lines
}

fn shop_lines<D: Dice>(app: &App<D>, snapshot: &Snapshot) -> Vec<Line<'static>> {
    let silver = snapshot.character.silver;
    let tab_style = |tab: ShopTab| {
        if app.shop_tab == tab {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled("[Buy]", tab_style(ShopTab::Buy)),
            Span::raw("  "),
            Span::styled("[Sell]", tab_style(ShopTab::Sell)),
            Span::raw(format!("   You have {} silver", silver)),
        ]),
        Line::from(""),
    ];

    let row = |i: usize, text: String, enabled: bool| {
        let selected = i == app.shop_cursor;
        let mut style = if enabled {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Line::from(vec![
            Span::raw(if selected { "> " } else { "  " }),
            Span::styled(text, style),
        ])
    };

    match app.shop_tab {
        ShopTab::Buy => {
            for (i, item) in SHOP_ITEMS.iter().enumerate() {
                let text = format!("{} ({}s): {}", item.name, item.price, item.description);
                lines.push(row(i, text, silver >= item.price));
            }
        }
        ShopTab::Sell => {
            for (i, (name, count)) in snapshot.character.inventory.iter().enumerate() {
                let text = format!("{} x{} - sells for {}s", name, count, sell_price(name));
                lines.push(row(i, text, true));
            }
        }
    }
    lines
}

fn ending_lines(snapshot: &Snapshot) -> Vec<Line<'static>> {
    let headline = match &snapshot.ending {
        Some(Ending::BossSlain) => "You defeated the Fortress Lord and conquered the Dark Fort!".to_string(),
        Some(Ending::SlainBy(monster)) => format!("You were slain by a {}.", monster),
        Some(Ending::Trap) => "You succumbed to a trap.".to_string(),
        Some(Ending::FledToDeath) => "You died while trying to flee.".to_string(),
        Some(Ending::Petrified(monster)) => format!("The {} turned you to stone.", monster),
        None => String::new(),
    };
    let stats = &snapshot.stats;
    let c = &snapshot.character;
    vec![
        Line::from(Span::styled(headline, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(format!("Final score: {} points at level {}", c.points, c.level)),
        Line::from(format!("Rooms explored: {}", snapshot.rooms_explored)),
        Line::from(format!("Monsters defeated: {}", stats.monsters_defeated)),
        Line::from(format!("Silver collected: {}", stats.total_silver_collected)),
        Line::from(format!("Potions drunk: {}", stats.potions_used)),
        Line::from(format!("Traps sprung: {}", stats.traps_triggered)),
        Line::from(format!(
            "Items bought / sold: {} / {}",
            stats.items_bought, stats.items_sold
        )),
        Line::from(""),
        Line::from("Press N to start a new adventure."),
    ]
    .into_iter()
    .map(|line| line.alignment(Alignment::Center))
    .collect()
}
