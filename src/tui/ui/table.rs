use crate::cards::{CardFace, Rank, Suit};
use crate::drill::Stage;
use crate::timer::Felt;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{card_slots, centered_fixed, centered_rect, inner};

const FELT: Color = Color::Rgb(0, 77, 0);
const ALERT: Color = Color::Rgb(255, 51, 0);
const ORANGE: Color = Color::Rgb(255, 149, 0);
const CARD_W: u16 = 7;
const CARD_H: u16 = 5;

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // header
            Constraint::Min(CARD_H + 4),    // felt: board + status
            Constraint::Length(CARD_H + 2), // hero hand
            Constraint::Length(3),          // controls
        ])
        .split(size);

    draw_header(f, app, chunks[0]);
    draw_felt(f, app, chunks[1]);
    draw_hand(f, app, chunks[2]);
    draw_controls(f, app, chunks[3]);

    if app.timer.is_time_up() {
        draw_time_overlay(f, chunks[1]);
    }
    if app.help_open() {
        draw_help(f);
    }
}

fn draw_header(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default().title("rtp-drill").borders(Borders::ALL);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner(area));
    f.render_widget(block, area);

    let left = Line::from(vec![
        Span::styled(app.drill.stage().label(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("   Timer / street: {}", app.timer_choice())),
    ]);
    f.render_widget(Paragraph::new(left), cols[0]);

    let countdown = Line::from(Span::styled(
        app.timer.countdown().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(countdown).alignment(Alignment::Right), cols[1]);
}

fn felt_color(felt: Felt) -> Color {
    match felt {
        Felt::Normal => FELT,
        Felt::Alert => ALERT,
    }
}

fn draw_felt(f: &mut Frame, app: &AppState, area: Rect) {
    let bg = felt_color(app.timer.felt());
    let block = Block::default()
        .title("Board")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ORANGE))
        .style(Style::default().bg(bg));
    let felt_inner = inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(CARD_H), Constraint::Length(2)])
        .split(felt_inner);

    let board = app.drill.board_faces();
    if app.drill.stage() == Stage::Start {
        let title = Paragraph::new(Line::from(Span::styled(
            "R T P   D R I L L",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(title, centered_fixed(rows[0].width, 1, rows[0]));
    } else if board.is_empty() {
        let empty = Paragraph::new("No board yet").alignment(Alignment::Center);
        f.render_widget(empty, centered_fixed(rows[0].width, 1, rows[0]));
    } else {
        let band = centered_fixed(rows[0].width, CARD_H, rows[0]);
        let fresh = fresh_slots(app.drill.stage());
        for (i, (face, slot)) in board.iter().zip(card_slots(board.len(), CARD_W, band)).enumerate() {
            let border = if fresh.contains(&i) { Some(Color::Yellow) } else { None };
            render_card(f, slot, *face, border);
        }
    }

    let status = Paragraph::new(status_line(app.drill.stage()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, rows[1]);
}

/// Board positions dealt by the current street.
fn fresh_slots(stage: Stage) -> &'static [usize] {
    match stage {
        Stage::Flop => &[0, 1, 2],
        Stage::Turn => &[3],
        Stage::River => &[4],
        _ => &[],
    }
}

fn status_line(stage: Stage) -> &'static str {
    match stage {
        Stage::Start => "Pick a timer and deal a hand.",
        Stage::Hand => "Keep this hand or reroll.",
        Stage::Flop => "Flop dealt. Make your decision.",
        Stage::Turn => "Turn dealt. Decide and continue.",
        Stage::River => "River dealt. Final decision spot.",
        Stage::Done => "Drill complete. Final board locked.",
    }
}

fn draw_hand(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default().title("Hero Hand").title_alignment(Alignment::Center);
    let hand_inner = Rect { height: area.height.saturating_sub(1), y: area.y + 1, ..area };
    f.render_widget(block, area);
    let band = centered_fixed(hand_inner.width, CARD_H, hand_inner);
    for (face, slot) in app.drill.hand_faces().into_iter().zip(card_slots(2, CARD_W, band)) {
        render_card(f, slot, face, Some(Color::Cyan));
    }
}

fn draw_controls(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Controls");
    let mut spans: Vec<Span> = Vec::new();
    for (i, c) in app.controls().iter().enumerate() {
        let key = if i == 0 { "Space" } else { "N" };
        let style = if c.primary {
            Style::default().fg(Color::Black).bg(ORANGE).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(format!(" [{key}] {} ", c.label), style));
    }
    spans.push(Span::styled(
        "   T timer • ? help • Q quit",
        Style::default().add_modifier(Modifier::DIM),
    ));
    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center).block(block);
    f.render_widget(para, area);
}

fn draw_time_overlay(f: &mut Frame, felt: Rect) {
    let area = centered_fixed(13, 3, felt);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ORANGE));
    let text = Paragraph::new(Line::from(Span::styled(
        "TIME!",
        Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(Clear, area);
    f.render_widget(text, area);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Drill:", bold)),
        Line::from("- Space / Enter: keep (or deal)"),
        Line::from("- N: new hand / flop / turn / river"),
        Line::from("- T: timer per street"),
        Line::from("- Q / Esc: quit"),
        Line::from(""),
        Line::from(Span::styled("Timer menu:", bold)),
        Line::from("- Up / Down: move selection"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    let glyph = match s {
        Suit::Hearts => '♥',
        Suit::Diamonds => '♦',
        Suit::Spades => '♠',
        Suit::Clubs => '♣',
    };
    let fg = if s.is_red() { Color::Red } else { Color::Black };
    (glyph, Style::default().fg(fg).bg(Color::White).add_modifier(Modifier::BOLD))
}

fn rank_label(r: Rank) -> String {
    match r {
        Rank::Ten => "10".to_string(),
        other => other.to_char().to_string(),
    }
}

fn render_card(f: &mut Frame, area: Rect, face: CardFace, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let content = match face {
        CardFace::Up(card) => {
            let (glyph, style) = suit_glyph_and_style(card.suit());
            block = block.style(Style::default().bg(Color::White));
            Line::from(Span::styled(format!("{}{glyph}", rank_label(card.rank())), style))
        }
        CardFace::Back => Line::from(Span::styled("░░░", Style::default().fg(Color::Blue))),
    };
    let card_inner = inner(area);
    f.render_widget(block, area);
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, centered_fixed(card_inner.width, 1, card_inner));
}
