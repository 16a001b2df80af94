use super::app::{App, Tone};
use darkfort::Dice;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draws the adventure log, newest entries at the bottom
pub fn draw_adventure_log<D: Dice>(frame: &mut Frame, area: Rect, app: &App<D>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Adventure Log ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let max_entries = inner.height as usize;
    let skip = app.log.len().saturating_sub(max_entries);
    let lines: Vec<Line> = app
        .log
        .iter()
        .skip(skip)
        .map(|entry| {
            let color = match entry.tone {
                Tone::Info => Color::Gray,
                Tone::Good => Color::Green,
                Tone::Bad => Color::Red,
            };
            Line::from(Span::styled(entry.message.clone(), Style::default().fg(color)))
        })
        .collect();

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
