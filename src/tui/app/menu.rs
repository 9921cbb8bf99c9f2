use crate::prefs::TimerChoice;
use std::time::Instant;

use super::{AppState, Scene};

impl AppState {
    /// One line per timer option; the active one is starred.
    pub fn menu_items_display(&self) -> Vec<String> {
        TimerChoice::ALL
            .iter()
            .map(|c| {
                let mark = if *c == self.timer_choice() { "*" } else { " " };
                format!("{mark} {}", c.label())
            })
            .collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        match self.scene {
            Scene::Menu => self.cancel_menu(),
            Scene::Table => self.open_menu(),
        }
    }

    pub fn open_menu(&mut self) {
        self.close_help();
        self.menu_index = self.timer_choice().index();
        self.scene = Scene::Menu;
    }

    pub fn apply_menu(&mut self, now: Instant) {
        let choice = TimerChoice::ALL[self.menu_index % TimerChoice::ALL.len()];
        self.scene = Scene::Table;
        if choice != self.timer_choice() {
            self.set_timer_choice(choice, now);
        }
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % TimerChoice::ALL.len();
    }

    pub fn menu_prev(&mut self) {
        let n = TimerChoice::ALL.len();
        self.menu_index = (self.menu_index + n - 1) % n;
    }
}
