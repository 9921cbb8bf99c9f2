use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("board must hold 0, 3, 4 or 5 cards, got {0}")]
    BoardLength(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("hole cards overlap with board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// The hero's two cards, highest rank first.
///
/// ```
/// use rtp_drill::cards::{Card, Rank, Suit};
/// use rtp_drill::hand::HoleCards;
///
/// let hole = HoleCards::try_new(
///     Card::new(Rank::Nine, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// ).unwrap();
/// assert_eq!(hole.high().rank(), Rank::King);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    /// Sorts by descending rank value; a pair keeps the given order.
    pub fn try_new(a: Card, b: Card) -> Result<Self, HandError> {
        if a == b {
            return Err(HandError::DuplicateHoleCards);
        }
        if b.rank() > a.rank() {
            Ok(Self(b, a))
        } else {
            Ok(Self(a, b))
        }
    }

    /// Caller guarantees `high` and `low` differ and are already in order.
    pub(crate) const fn new_sorted(high: Card, low: Card) -> Self {
        Self(high, low)
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        if slice.len() != 2 {
            return Err(HandError::HoleCount(slice.len()));
        }
        Self::try_new(slice[0], slice[1])
    }

    pub fn high(&self) -> Card {
        self.0
    }

    pub fn low(&self) -> Card {
        self.1
    }

    pub fn as_array(&self) -> [Card; 2] {
        [self.0, self.1]
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0 == card || self.1 == card
    }
}

impl fmt::Display for HoleCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards. Only the street sizes 0, 3, 4 and 5 are valid.
///
/// ```
/// use rtp_drill::hand::Board;
///
/// let board: Board = "2c 3c 4c".parse().unwrap();
/// assert_eq!(board.len(), 3);
/// assert!("2c 3c".parse::<Board>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn empty() -> Self {
        Self { cards: Vec::with_capacity(5) }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if !matches!(cards.len(), 0 | 3 | 4 | 5) {
            return Err(HandError::BoardLength(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// The first `n` cards (fewer if the board is shorter).
    pub fn prefix(&self, n: usize) -> &[Card] {
        &self.cards[..n.min(self.cards.len())]
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }

    /// Replace the board with `kept` followed by `fresh`.
    pub(crate) fn replace(&mut self, kept: &[Card], fresh: &[Card]) {
        let mut next = Vec::with_capacity(kept.len() + fresh.len());
        next.extend_from_slice(kept);
        next.extend_from_slice(fresh);
        self.cards = next;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Check that hole cards and board share no card.
pub fn validate_drill(hole: &HoleCards, board: &Board) -> Result<(), HandError> {
    let set: HashSet<Card> = board.as_slice().iter().copied().collect();
    if set.len() != board.len() {
        return Err(HandError::DuplicateBoardCards);
    }
    if set.contains(&hole.high()) || set.contains(&hole.low()) {
        return Err(HandError::Overlap);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn hole_cards_sort_high_first() {
        let seven = Card::new(Rank::Seven, Suit::Clubs);
        let ace = Card::new(Rank::Ace, Suit::Hearts);
        let hole = HoleCards::try_new(seven, ace).unwrap();
        assert_eq!(hole.as_array(), [ace, seven]);
    }

    #[test]
    fn pairs_keep_given_order() {
        let a = Card::new(Rank::Eight, Suit::Clubs);
        let b = Card::new(Rank::Eight, Suit::Spades);
        assert_eq!(HoleCards::try_new(a, b).unwrap().as_array(), [a, b]);
        assert_eq!(HoleCards::try_new(b, a).unwrap().as_array(), [b, a]);
    }

    #[test]
    fn hole_cards_must_be_distinct() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert!(matches!(HoleCards::try_new(a, a), Err(HandError::DuplicateHoleCards)));
        assert!(matches!("As".parse::<HoleCards>(), Err(HandError::HoleCount(1))));
    }

    #[test]
    fn board_accepts_only_street_sizes() {
        for n in [0usize, 3, 4, 5] {
            let cards: Vec<Card> = crate::cards::full_deck().take(n).collect();
            assert!(Board::try_new(cards).is_ok(), "size {n}");
        }
        for n in [1usize, 2, 6] {
            let cards: Vec<Card> = crate::cards::full_deck().take(n).collect();
            assert!(matches!(Board::try_new(cards), Err(HandError::BoardLength(m)) if m == n));
        }
        let dup = vec![Card::new(Rank::Two, Suit::Clubs); 3];
        assert!(matches!(Board::try_new(dup), Err(HandError::DuplicateBoardCards)));
    }

    #[test]
    fn replace_keeps_prefix() {
        let mut board: Board = "2c 3c 4c 5c".parse().unwrap();
        let flop = board.prefix(3).to_vec();
        board.replace(&flop, &[Card::new(Rank::King, Suit::Hearts)]);
        assert_eq!(board, "2c 3c 4c Kh".parse::<Board>().unwrap());
        assert_eq!(board.prefix(9).len(), 4);
    }

    #[test]
    fn display_uses_card_codes() {
        let hole: HoleCards = "Kd As".parse().unwrap();
        assert_eq!(hole.to_string(), "AsKd");
        let board: Board = "2c Th 9s".parse().unwrap();
        assert_eq!(board.to_string(), "2c Th 9s");
    }

    #[test]
    fn validate_catches_overlap() {
        let hole: HoleCards = "As Kd".parse().unwrap();
        let board: Board = "As 2c 3c".parse().unwrap();
        assert!(matches!(validate_drill(&hole, &board), Err(HandError::Overlap)));
        let board: Board = "Qs 2c 3c".parse().unwrap();
        assert!(validate_drill(&hole, &board).is_ok());
    }
}
