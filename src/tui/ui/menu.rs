use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_fixed, inner};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let items = app.menu_items_display();
    let height = items.len() as u16 + 6;
    let area = centered_fixed(36, height, f.area());
    let block = Block::default().title("Timer / street").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::with_capacity(items.len() + 3);
    for (i, it) in items.iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(it.clone(), style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Apply  [Esc] Cancel  [↑/↓] Move",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    f.render_widget(para, inner(area));
}
