//! rtp-drill: street-by-street Texas Hold'em decision drill
//!
//! The library holds the drill core so it can be driven without a terminal:
//! - [`selector`] deals playable starting hands
//! - [`deck`] deals board cards around the cards already on the table
//! - [`drill`] walks hand → flop → turn → river, with per-street re-rolls
//! - [`timer`] counts down each street on a cooperative [`schedule`]
//!
//! ## Quick start
//! ```
//! use rtp_drill::drill::{Drill, Stage};
//!
//! let mut drill = Drill::seeded(42);
//! drill.deal();
//! drill.keep_hand();
//! let flop = drill.board().prefix(3).to_vec();
//!
//! drill.keep_flop();
//! assert_eq!(drill.stage(), Stage::Turn);
//! assert_eq!(drill.board().prefix(3), flop.as_slice());
//! ```
//!
//! ## TUI
//! ```sh
//! cargo run --bin rtp-drill
//! ```

pub mod cards;
pub mod deck;
pub mod drill;
pub mod hand;
pub mod logging;
pub mod prefs;
pub mod schedule;
pub mod selector;
pub mod timer;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
