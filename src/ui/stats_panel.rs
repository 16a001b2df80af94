use super::app::{App, Focus};
use super::combat_effects::EffectType;
use darkfort::catalog::{find_item, ItemKind};
use darkfort::{Dice, Phase, Snapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the character sheet: header, hp bar, derived stats and inventory
pub fn draw_stats_panel<D: Dice>(frame: &mut Frame, area: Rect, app: &App<D>, snapshot: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Name, level, points
            Constraint::Length(3), // HP gauge
            Constraint::Length(6), // Derived stats
            Constraint::Min(0),    // Inventory
        ])
        .split(area);

    draw_header(frame, chunks[0], snapshot);
    draw_hp(frame, chunks[1], app, snapshot);
    draw_derived_stats(frame, chunks[2], snapshot);
    draw_inventory(frame, chunks[3], app, snapshot);
}

fn draw_header(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let c = &snapshot.character;
    let level_style = if snapshot.can_level_up {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };

    let text = vec![
        Line::from(vec![
            Span::styled(
                format!("{} the {}", c.name, c.profession),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(format!("Level {}", c.level), level_style),
        ]),
        Line::from(vec![
            Span::styled(format!("Points: {}", c.points), Style::default().fg(Color::Yellow)),
            Span::raw(" | "),
            Span::styled(format!("Silver: {}", c.silver), Style::default().fg(Color::White)),
            Span::raw(" | "),
            Span::styled(
                format!("Rooms: {}", snapshot.rooms_explored),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    let header = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Character"))
        .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_hp<D: Dice>(frame: &mut Frame, area: Rect, app: &App<D>, snapshot: &Snapshot) {
    let c = &snapshot.character;
    let ratio = if c.max_hp > 0 {
        c.hp as f64 / c.max_hp as f64
    } else {
        0.0
    };
    let color = match ratio {
        r if r > 0.6 => Color::Green,
        r if r > 0.3 => Color::Yellow,
        _ => Color::Red,
    };
    let border = app
        .flash_color(EffectType::PlayerHit)
        .or_else(|| app.flash_color(EffectType::LevelUp))
        .unwrap_or(Color::White);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title("HP"),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}/{}", c.hp, c.max_hp));
    frame.render_widget(gauge, area);
}

fn draw_derived_stats(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let d = &snapshot.derived;
    let damage = if d.flat_damage_bonus > 0 {
        format!("{}+{}", d.attack_damage, d.flat_damage_bonus)
    } else {
        d.attack_damage.to_string()
    };
    let c = &snapshot.character;

    let text = vec![
        Line::from(vec![
            Span::styled("Damage:  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(damage, Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![
            Span::styled("Defense: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(d.defense.to_string(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(vec![
            Span::styled("Weapon:  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(c.equipped_weapon.as_deref().unwrap_or("bare hands").to_string()),
        ]),
        Line::from(vec![
            Span::styled("Armor:   ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(c.equipped_armor.as_deref().unwrap_or("none").to_string()),
        ]),
    ];

    let stats = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(stats, area);
}

fn item_tag(name: &str) -> &'static str {
    match find_item(name).map(|item| item.kind) {
        Some(ItemKind::Weapon { .. }) => "[W]",
        Some(ItemKind::Armor { .. }) => "[A]",
        Some(ItemKind::Potion) => "[P]",
        _ => "[ ]",
    }
}

fn draw_inventory<D: Dice>(frame: &mut Frame, area: Rect, app: &App<D>, snapshot: &Snapshot) {
    let focused = app.focus == Focus::Inventory;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { Color::Yellow } else { Color::White }))
        .title(if focused {
            " Inventory (Enter = equip/stow, Esc = close) "
        } else {
            " Inventory "
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let c = &snapshot.character;
    let mut lines: Vec<Line> = Vec::new();
    if c.inventory.is_empty() {
        lines.push(Line::from(Span::styled(
            "  Empty",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, (name, count)) in c.inventory.iter().enumerate() {
        let selected = focused && i == app.inventory_cursor;
        let marker = if selected { "> " } else { "  " };
        let count_text = if count > 1 {
            format!(" x{}", count)
        } else {
            String::new()
        };
        let mut spans = vec![
            Span::raw(marker),
            Span::styled(format!("{} ", item_tag(name)), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}{}", name, count_text),
                if selected {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                },
            ),
        ];
        if c.is_equipped(name) {
            spans.push(Span::styled(" (equipped)", Style::default().fg(Color::Green)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Draws the controls for the current phase
pub fn draw_footer<D: Dice>(frame: &mut Frame, area: Rect, app: &App<D>, snapshot: &Snapshot) {
    let key = |k: &'static str| {
        Span::styled(k, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    };
    let mut spans = vec![Span::styled("Controls: ", Style::default().add_modifier(Modifier::BOLD))];

    let controls: &[(&'static str, &'static str)] = if app.focus == Focus::Inventory {
        &[("Up/Down", "Select"), ("Enter", "Equip/Stow"), ("Esc", "Close")]
    } else {
        match snapshot.phase {
            Phase::Exploring => &[
                ("E", "Explore"),
                ("P", "Potion"),
                ("L", "Level Up"),
                ("I", "Inventory"),
                ("Q", "Quit"),
            ],
            Phase::PreCombatChoice => &[("A", "Attack"), ("F", "Flee"), ("I", "Inventory"), ("Q", "Quit")],
            Phase::InCombat => &[("A", "Attack"), ("F", "Flee"), ("P", "Potion"), ("Q", "Quit")],
            Phase::InShop => &[
                ("Tab", "Buy/Sell"),
                ("Enter", "Trade"),
                ("X", "Leave"),
                ("L", "Level Up"),
                ("I", "Inventory"),
                ("Q", "Quit"),
            ],
            Phase::Victory | Phase::Defeat => &[("N", "New Adventure"), ("Q", "Quit")],
        }
    };

    for (i, (k, label)) in controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(key(*k));
        spans.push(Span::raw(format!(" = {}", label)));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
