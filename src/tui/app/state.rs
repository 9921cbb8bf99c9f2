use crate::drill::{Drill, DrillAction, Stage};
use crate::prefs::{PrefsStore, TimerChoice};
use crate::timer::{StreetTimer, TimerEvent};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Table,
    Menu,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    /// The highlighted button for the current stage.
    Primary,
    /// The re-roll button for the current stage, if any.
    Secondary,
    ToggleMenu,
    ToggleHelp,
    MenuNext,
    MenuPrev,
    MenuApply,
    MenuCancel,
}

/// A button on the controls bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub action: DrillAction,
    pub primary: bool,
}

const fn control(label: &'static str, action: DrillAction, primary: bool) -> Control {
    Control { label, action, primary }
}

/// Buttons offered at each stage, primary first.
pub fn controls(stage: Stage) -> &'static [Control] {
    static START: [Control; 1] = [control("Deal Hand", DrillAction::Deal, true)];
    static HAND: [Control; 2] = [
        control("Keep Hand", DrillAction::KeepHand, true),
        control("New Hand", DrillAction::Deal, false),
    ];
    static FLOP: [Control; 2] = [
        control("Keep Flop → Turn", DrillAction::KeepFlop, true),
        control("New Flop", DrillAction::NewFlop, false),
    ];
    static TURN: [Control; 2] = [
        control("Keep Turn → River", DrillAction::KeepTurn, true),
        control("New Turn", DrillAction::NewTurn, false),
    ];
    static RIVER: [Control; 2] = [
        control("Keep River", DrillAction::KeepRiver, true),
        control("New River", DrillAction::NewRiver, false),
    ];
    static DONE: [Control; 2] = [
        control("Deal Hand", DrillAction::Deal, true),
        control("New River", DrillAction::NewRiver, false),
    ];
    match stage {
        Stage::Start => &START,
        Stage::Hand => &HAND,
        Stage::Flop => &FLOP,
        Stage::Turn => &TURN,
        Stage::River => &RIVER,
        Stage::Done => &DONE,
    }
}

/// Everything the TUI shows, plus the drill and timer it drives.
#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub drill: Drill,
    pub timer: StreetTimer,
    // Menu cursor into TimerChoice::ALL
    pub menu_index: usize,
    timer_choice: TimerChoice,
    prefs: Option<PrefsStore>,
    help_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_drill(Drill::new())
    }
}

impl AppState {
    fn with_drill(drill: Drill) -> Self {
        Self {
            scene: Scene::Table,
            drill,
            timer: StreetTimer::new(),
            menu_index: 0,
            timer_choice: TimerChoice::Off,
            prefs: None,
            help_open: false,
        }
    }

    /// Reproducible deals, no persisted preference.
    pub fn seeded(seed: u64) -> Self {
        Self::with_drill(Drill::seeded(seed))
    }

    /// Restore the timer choice from `store` and save every later change to it.
    pub fn with_prefs(mut self, store: PrefsStore) -> Self {
        self.timer_choice = store.load();
        log::info!("timer per street: {}", self.timer_choice);
        self.prefs = Some(store);
        self
    }

    pub fn timer_choice(&self) -> TimerChoice {
        self.timer_choice
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn controls(&self) -> &'static [Control] {
        controls(self.drill.stage())
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        self.handle_input_at(action, Instant::now())
    }

    /// Apply `action` as if it happened at `now`. Returns `true` if the drill moved.
    pub fn handle_input_at(&mut self, action: InputAction, now: Instant) -> bool {
        match action {
            InputAction::Primary | InputAction::Secondary => {
                if self.scene != Scene::Table || self.help_open {
                    return false;
                }
                let slot = usize::from(action == InputAction::Secondary);
                match self.controls().get(slot) {
                    Some(c) => self.apply_drill(c.action, now),
                    None => false,
                }
            }
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu(now);
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
        }
    }

    /// Run a drill transition and move the street timer along with it.
    pub fn apply_drill(&mut self, action: DrillAction, now: Instant) -> bool {
        if !self.drill.apply(action) {
            return false;
        }
        let stage = self.drill.stage();
        if stage.is_street() {
            self.timer.start_for_street(self.timer_choice.seconds(), now);
        } else {
            self.timer.stop(true);
            self.timer.clear_alert();
        }
        true
    }

    /// Change the per-street timer. Mid-street the countdown restarts at once.
    pub fn set_timer_choice(&mut self, choice: TimerChoice, now: Instant) {
        self.timer_choice = choice;
        if let Some(store) = &self.prefs {
            store.save(choice);
        }
        if self.drill.stage().is_street() {
            self.timer.start_for_street(choice.seconds(), now);
        } else if choice == TimerChoice::Off {
            self.timer.stop(true);
        }
    }

    /// Drive the timer; called by the controller loop on every wakeup.
    pub fn on_tick(&mut self, now: Instant) -> Vec<TimerEvent> {
        let events = self.timer.run_due(now);
        if events.contains(&TimerEvent::Expired) {
            log::info!("time up on the {}", self.drill.stage().label());
        }
        events
    }

    /// Earliest instant the timer needs [`AppState::on_tick`].
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_due()
    }
}
