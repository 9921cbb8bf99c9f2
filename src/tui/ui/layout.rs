use ratatui::layout::{Constraint, Direction, Flex};
use ratatui::prelude::{Layout, Rect};

/// Area inside a one-cell border.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1]);
    cols[1]
}

/// A `width` x `height` box centred in `r`, clipped to it.
pub(super) fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let rows = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .split(r);
    let cols = Layout::horizontal([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .split(rows[0]);
    cols[0]
}

/// `n` card slots of `width` columns, centred horizontally in `r`.
pub(super) fn card_slots(n: usize, width: u16, r: Rect) -> Vec<Rect> {
    Layout::horizontal((0..n).map(|_| Constraint::Length(width)))
        .flex(Flex::Center)
        .spacing(1)
        .split(r)
        .to_vec()
}
