//! Starting-hand filter.
//!
//! Hands are drawn from a fresh 52-card deck (never the live one) and kept
//! only if they fall inside a fixed training range: every pair, every suited
//! combo, and a hand-picked set of offsuit broadways and connectors.

use crate::cards::{full_deck, Card, Rank, Suit};
use crate::hand::HoleCards;
use rand::Rng;

/// Upper bound on rejection-sampling draws before falling back.
pub const MAX_DRAWS: usize = 10_000;

/// Dealt when [`MAX_DRAWS`] draws all miss the range.
pub const FALLBACK: HoleCards =
    HoleCards::new_sorted(Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Spades));

/// Whether a two-card starting hand is inside the drill range.
///
/// ```
/// use rtp_drill::cards::Card;
/// use rtp_drill::selector::is_playable;
///
/// let c = |s: &str| -> Card { s.parse().unwrap() };
/// assert!(is_playable(c("Ah"), c("Kh")));
/// assert!(!is_playable(c("7d"), c("2c")));
/// ```
pub fn is_playable(a: Card, b: Card) -> bool {
    let (v1, v2) = (a.rank().value(), b.rank().value());
    if v1 == v2 {
        return true;
    }
    if a.suit() == b.suit() {
        return true;
    }

    let (high, low) = (v1.max(v2), v1.min(v2));
    let gap = high - low - 1;

    // Offsuit range, kept as a literal table.
    (high >= 12 && low >= 10)
        || (high == 14 && low >= 7)
        || (high == 13 && low >= 9)
        || (high == 12 && low >= 9)
        || (high == 11 && low >= 9)
        || (high >= 10 && low >= 7 && gap <= 2)
        || matches!((high, low), (9, 8) | (8, 7))
}

/// Draw a playable starting hand, highest rank first.
pub fn generate_playable_hand<R: Rng + ?Sized>(rng: &mut R) -> HoleCards {
    generate_with_limit(rng, MAX_DRAWS)
}

pub(crate) fn generate_with_limit<R: Rng + ?Sized>(rng: &mut R, max_draws: usize) -> HoleCards {
    let deck: Vec<Card> = full_deck().collect();
    for _ in 0..max_draws {
        let i = rng.random_range(0..deck.len());
        let mut j = rng.random_range(0..deck.len() - 1);
        if j >= i {
            j += 1;
        }
        let (a, b) = (deck[i], deck[j]);
        if is_playable(a, b) {
            if let Ok(hole) = HoleCards::try_new(a, b) {
                return hole;
            }
        }
    }
    log::warn!("no playable hand in {max_draws} draws, dealing fallback");
    FALLBACK
}
