use crate::cards::{full_deck, Card};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The live deck the drill deals board cards from.
///
/// The deck never holds a card that is currently in play: every street
/// rebuilds it from the full 52 minus the cards on the table.
///
/// ```
/// use rtp_drill::cards::Card;
/// use rtp_drill::deck::Deck;
///
/// let mut deck = Deck::seeded(1);
/// let as_: Card = "As".parse().unwrap();
/// deck.reset(&[as_]);
/// assert_eq!(deck.len(), 51);
/// assert!(!deck.contains(as_));
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// An empty deck with a freshly seeded RNG; call [`Deck::reset`] before dealing.
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(52), rng: ChaCha8Rng::from_rng(&mut rand::rng()) }
    }

    /// An empty deck whose shuffles are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self { cards: Vec::with_capacity(52), rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Rebuild all 52 cards, drop the excluded ones, shuffle what is left.
    pub fn reset(&mut self, excluded: &[Card]) {
        self.cards.clear();
        self.cards.extend(full_deck().filter(|c| !excluded.contains(c)));
        self.cards.shuffle(&mut self.rng);
    }

    /// Deal the top card. An empty deck is first reset around `in_play`.
    ///
    /// `None` only when every card is in play.
    pub fn deal_one(&mut self, in_play: &[Card]) -> Option<Card> {
        if self.cards.is_empty() {
            log::debug!("deck exhausted, reshuffling around {} live cards", in_play.len());
            self.reset(in_play);
        }
        self.cards.pop()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cards(codes: &str) -> Vec<Card> {
        crate::cards::parse_cards(codes).unwrap()
    }

    #[test]
    fn reset_removes_exclusions() {
        let mut d = Deck::seeded(3);
        let excluded = cards("As Kd 7h");
        d.reset(&excluded);
        assert_eq!(d.len(), 49);
        let unique: HashSet<Card> = d.as_slice().iter().copied().collect();
        assert_eq!(unique.len(), 49);
        assert!(excluded.iter().all(|c| !d.contains(*c)));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::seeded(42);
        let mut d2 = Deck::seeded(42);
        d1.reset(&[]);
        d2.reset(&[]);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn reset_shuffles() {
        let mut d = Deck::seeded(9);
        d.reset(&[]);
        let ordered: Vec<Card> = full_deck().collect();
        assert_ne!(d.cards, ordered);
    }

    #[test]
    fn dealing_empties_then_reshuffles_around_live_cards() {
        let mut d = Deck::seeded(7);
        d.reset(&[]);
        let mut seen = HashSet::new();
        for _ in 0..52 {
            assert!(seen.insert(d.deal_one(&[]).unwrap()));
        }
        assert!(d.is_empty());

        let live = cards("2c 3c 4c 5c 6c 7c 8c");
        let next = d.deal_one(&live).unwrap();
        assert!(!live.contains(&next));
        assert_eq!(d.len(), 52 - live.len() - 1);
    }

    #[test]
    fn fresh_deck_resets_on_first_deal() {
        let mut d = Deck::seeded(11);
        assert!(d.is_empty());
        let live = cards("Ah Kh");
        let c = d.deal_one(&live).unwrap();
        assert!(!live.contains(&c));
        assert_eq!(d.len(), 49);
    }

    #[test]
    fn nothing_to_deal_when_every_card_is_live() {
        let mut d = Deck::seeded(1);
        let all: Vec<Card> = full_deck().collect();
        assert_eq!(d.deal_one(&all), None);
    }
}
