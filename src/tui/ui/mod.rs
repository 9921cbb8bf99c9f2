mod layout;
mod menu;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

/// The table is always drawn; the timer menu floats over it.
pub fn draw(f: &mut Frame, app: &AppState) {
    table::draw_table(f, app);
    if app.scene == Scene::Menu {
        menu::draw_menu(f, app);
    }
}
