use crate::cards::{Card, CardFace};
use crate::deck::Deck;
use crate::hand::{Board, HoleCards};
use crate::selector::generate_playable_hand;

/// Where the user is in one pass of the drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Stage {
    Start,
    Hand,
    Flop,
    Turn,
    River,
    Done,
}

impl Stage {
    /// Flop, turn and river run the street timer.
    pub fn is_street(self) -> bool {
        matches!(self, Stage::Flop | Stage::Turn | Stage::River)
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Start => "Start",
            Stage::Hand => "Hand",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
            Stage::Done => "Done",
        }
    }
}

/// User-triggered drill transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DrillAction {
    Deal,
    KeepHand,
    NewFlop,
    KeepFlop,
    NewTurn,
    KeepTurn,
    NewRiver,
    KeepRiver,
}

/// Hand, board, live deck and stage for a single drill.
///
/// Every transition returns `true` when applied. A call that is not legal
/// from the current stage, or whose board prerequisite is missing, returns
/// `false` and leaves the drill untouched.
///
/// ```
/// use rtp_drill::drill::{Drill, Stage};
///
/// let mut drill = Drill::seeded(7);
/// assert!(drill.deal());
/// assert!(drill.keep_hand());
/// assert_eq!(drill.stage(), Stage::Flop);
/// assert_eq!(drill.board().len(), 3);
/// assert!(!drill.keep_river());
/// ```
#[derive(Debug, Clone)]
pub struct Drill {
    stage: Stage,
    hand: Option<HoleCards>,
    board: Board,
    deck: Deck,
}

impl Drill {
    pub fn new() -> Self {
        Self::with_deck(Deck::new())
    }

    /// Reproducible hands and boards.
    pub fn seeded(seed: u64) -> Self {
        Self::with_deck(Deck::seeded(seed))
    }

    fn with_deck(deck: Deck) -> Self {
        Self { stage: Stage::Start, hand: None, board: Board::empty(), deck }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn hand(&self) -> Option<HoleCards> {
        self.hand
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Hand plus board: every card visible on the table.
    pub fn in_play(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(7);
        if let Some(hand) = self.hand {
            cards.extend(hand.as_array());
        }
        cards.extend_from_slice(self.board.as_slice());
        cards
    }

    /// The two hero slots; backs until a hand is dealt.
    pub fn hand_faces(&self) -> [CardFace; 2] {
        match self.hand {
            Some(hand) => hand.as_array().map(CardFace::Up),
            None => [CardFace::Back; 2],
        }
    }

    pub fn board_faces(&self) -> Vec<CardFace> {
        self.board.as_slice().iter().copied().map(CardFace::Up).collect()
    }

    pub fn apply(&mut self, action: DrillAction) -> bool {
        let applied = match action {
            DrillAction::Deal => self.deal(),
            DrillAction::KeepHand => self.keep_hand(),
            DrillAction::NewFlop => self.new_flop(),
            DrillAction::KeepFlop => self.keep_flop(),
            DrillAction::NewTurn => self.new_turn(),
            DrillAction::KeepTurn => self.keep_turn(),
            DrillAction::NewRiver => self.new_river(),
            DrillAction::KeepRiver => self.keep_river(),
        };
        if !applied {
            log::debug!("{action:?} ignored at {:?} with {} board cards", self.stage, self.board.len());
        }
        applied
    }

    /// Deal a fresh playable hand and clear the board. Also serves as "new hand".
    pub fn deal(&mut self) -> bool {
        if !matches!(self.stage, Stage::Start | Stage::Hand | Stage::Done) {
            return false;
        }
        let hand = generate_playable_hand(self.deck.rng_mut());
        log::info!("dealt {hand}");
        self.hand = Some(hand);
        self.board.clear();
        self.stage = Stage::Hand;
        true
    }

    pub fn keep_hand(&mut self) -> bool {
        self.stage == Stage::Hand && self.enter_flop()
    }

    pub fn new_flop(&mut self) -> bool {
        self.stage == Stage::Flop && self.enter_flop()
    }

    pub fn keep_flop(&mut self) -> bool {
        self.stage == Stage::Flop && self.enter_turn()
    }

    /// Re-deal the turn card; the flop stays.
    pub fn new_turn(&mut self) -> bool {
        self.stage == Stage::Turn && self.enter_turn()
    }

    pub fn keep_turn(&mut self) -> bool {
        self.stage == Stage::Turn && self.enter_river()
    }

    /// Re-deal the river card; also reopens a finished drill.
    pub fn new_river(&mut self) -> bool {
        matches!(self.stage, Stage::River | Stage::Done) && self.enter_river()
    }

    pub fn keep_river(&mut self) -> bool {
        if self.stage != Stage::River {
            return false;
        }
        self.stage = Stage::Done;
        true
    }

    fn enter_flop(&mut self) -> bool {
        self.deal_street(0, 3, Stage::Flop)
    }

    fn enter_turn(&mut self) -> bool {
        self.board.len() >= 3 && self.deal_street(3, 1, Stage::Turn)
    }

    fn enter_river(&mut self) -> bool {
        self.board.len() >= 4 && self.deal_street(4, 1, Stage::River)
    }

    /// Keep the first `keep` board cards, rebuild the deck around hand + kept
    /// cards, append `count` new ones.
    fn deal_street(&mut self, keep: usize, count: usize, next: Stage) -> bool {
        let Some(hand) = self.hand else {
            return false;
        };
        let kept = self.board.prefix(keep).to_vec();
        let mut excluded = hand.as_array().to_vec();
        excluded.extend_from_slice(&kept);
        self.deck.reset(&excluded);

        let in_play = self.in_play();
        let mut fresh = Vec::with_capacity(count);
        for _ in 0..count {
            match self.deck.deal_one(&in_play) {
                Some(card) => fresh.push(card),
                None => {
                    log::error!("deck ran dry dealing the {}", next.label());
                    return false;
                }
            }
        }
        self.board.replace(&kept, &fresh);
        self.stage = next;
        log::info!("{}: {}", next.label(), self.board);
        true
    }
}

impl Default for Drill {
    fn default() -> Self {
        Self::new()
    }
}
