use proptest::collection::hash_set;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rtp_drill::cards::{full_deck, Card};
use rtp_drill::deck::Deck;
use rtp_drill::hand::HoleCards;
use rtp_drill::selector::{generate_playable_hand, is_playable};
use std::collections::HashSet;

fn any_card() -> impl Strategy<Value = Card> {
    let deck: Vec<Card> = full_deck().collect();
    (0usize..52).prop_map(move |i| deck[i])
}

#[test]
fn suited_ace_king_plays_and_seven_deuce_folds() {
    let c = |s: &str| -> Card { s.parse().unwrap() };
    assert!(is_playable(c("Ah"), c("Kh")));
    assert!(!is_playable(c("7d"), c("2c")));
}

proptest! {
    #[test]
    fn generated_hands_are_playable(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let hole = generate_playable_hand(&mut rng);
        prop_assert!(is_playable(hole.high(), hole.low()));
        prop_assert!(hole.high().rank() >= hole.low().rank());
        prop_assert_ne!(hole.high(), hole.low());
    }

    #[test]
    fn predicate_is_symmetric(a in any_card(), b in any_card()) {
        prop_assert_eq!(is_playable(a, b), is_playable(b, a));
    }

    #[test]
    fn pairs_and_suited_always_play(a in any_card(), b in any_card()) {
        if a.rank() == b.rank() || a.suit() == b.suit() {
            prop_assert!(is_playable(a, b));
        }
    }

    #[test]
    fn hole_cards_order_by_rank(a in any_card(), b in any_card()) {
        prop_assume!(a != b);
        let hole = HoleCards::try_new(a, b).unwrap();
        prop_assert!(hole.high().rank() >= hole.low().rank());
        prop_assert!(hole.contains(a) && hole.contains(b));
    }

    #[test]
    fn reset_leaves_exactly_the_rest(excluded in hash_set(any_card(), 0..8), seed in any::<u64>()) {
        let excluded: Vec<Card> = excluded.into_iter().collect();
        let mut deck = Deck::seeded(seed);
        deck.reset(&excluded);
        prop_assert_eq!(deck.len(), 52 - excluded.len());
        let unique: HashSet<Card> = deck.as_slice().iter().copied().collect();
        prop_assert_eq!(unique.len(), deck.len());
        prop_assert!(excluded.iter().all(|c| !unique.contains(c)));
    }

    #[test]
    fn dealing_is_duplicate_free_until_exhausted(seed in any::<u64>(), n in 1usize..=52) {
        let mut deck = Deck::seeded(seed);
        deck.reset(&[]);
        let mut seen = HashSet::new();
        for _ in 0..n {
            let card = deck.deal_one(&[]).unwrap();
            prop_assert!(seen.insert(card));
        }
        prop_assert_eq!(deck.len(), 52 - n);
    }
}
