mod menu;
mod state;

pub use state::{controls, AppState, Control, InputAction, Scene};
