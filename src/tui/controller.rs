use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Draw, wait for a key or the next timer deadline, repeat until quit.
///
/// `frame_rate` caps how long the loop sleeps when no timer job is pending.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    frame_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let now = Instant::now();
        let timeout = app
            .next_deadline()
            .map(|due| due.saturating_duration_since(now).min(frame_rate))
            .unwrap_or(frame_rate);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key.code) {
                    break;
                }
            }
        }

        app.on_tick(Instant::now());
    }
    Ok(())
}

/// Map a key to an input action. Returns `true` when the user quits.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up | KeyCode::Char('k') => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Esc | KeyCode::Char('t') | KeyCode::Char('T') => {
                let _ = app.handle_input(InputAction::MenuCancel);
            }
            _ => {}
        },
        Scene::Table => match code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                let _ = app.handle_input(InputAction::Primary);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let _ = app.handle_input(InputAction::Secondary);
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        },
    }
    false
}
