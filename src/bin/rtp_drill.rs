use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use rtp_drill::logging;
use rtp_drill::prefs::PrefsStore;
use rtp_drill::tui::{app::AppState, controller};
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "rtp-drill needs a real terminal (TTY).\nRun it in a terminal and press q to quit. Version: {}",
            rtp_drill::VERSION
        );
        return Ok(());
    }

    let prefs = PrefsStore::locate();
    let log_dir = prefs.path().parent().map(|p| p.to_path_buf()).unwrap_or_default();
    // The drill works without a log file.
    let _ = logging::init(&log_dir.join(logging::LOG_FILE), logging::level_from_env());

    let mut terminal = setup_terminal()?;
    let frame_rate = Duration::from_millis(250);
    let mut app = AppState::default().with_prefs(prefs);

    let res = controller::run(&mut terminal, &mut app, frame_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    log::info!("bye");
    res
}
