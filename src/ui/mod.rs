pub mod app;
pub mod combat_effects;
mod info_panel;
mod room_panel;
mod stats_panel;

use app::App;
use darkfort::Dice;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main UI drawing function
pub fn draw_ui<D: Dice>(frame: &mut Frame, app: &App<D>) {
    let snapshot = app.session.snapshot();
    let size = frame.size();

    // Main content above, controls footer below
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sheet + room + log
            Constraint::Length(3), // Footer
        ])
        .split(size);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Character sheet
            Constraint::Percentage(60), // Room + adventure log
        ])
        .split(v_chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(14), // Current room
            Constraint::Min(0),     // Adventure log
        ])
        .split(chunks[1]);

    stats_panel::draw_stats_panel(frame, chunks[0], app, &snapshot);
    room_panel::draw_room_panel(frame, right[0], app, &snapshot);
    info_panel::draw_adventure_log(frame, right[1], app);
    stats_panel::draw_footer(frame, v_chunks[1], app, &snapshot);
}
