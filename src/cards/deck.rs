//! Deck construction and the dealt card sequence.
//!
//! `build_deck` deals two cards per catalog name, each with a fresh uid,
//! face-down and unmatched, then applies a uniform shuffle. Positions are fixed
//! from then on; play only changes the cards' flags.
//!
//! ```
//! use memory_match::cards::{build_deck, Catalog};
//! use memory_match::core::{GameRng, UidAllocator};
//!
//! let catalog = Catalog::new(["bear", "fox"]).unwrap();
//! let deck = build_deck(&catalog, &mut GameRng::new(42), &mut UidAllocator::new());
//!
//! assert_eq!(deck.len(), 4);
//! assert!(deck.pair_counts().values().all(|&count| count == 2));
//! ```

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::catalog::Catalog;
use crate::core::{GameRng, UidAllocator};

/// Ordered, fixed-position card sequence for one session.
///
/// Backed by `im::Vector` so clones (snapshots) share structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Deck index of the card with the given face name, skipping `except`.
    ///
    /// Handy for adapters and tests that need "the other bear".
    #[must_use]
    pub fn position_of(&self, name: &str, except: Option<usize>) -> Option<usize> {
        self.cards
            .iter()
            .enumerate()
            .find(|(i, card)| Some(*i) != except && card.name() == name)
            .map(|(i, _)| i)
    }

    /// How many cards carry each face name.
    #[must_use]
    pub fn pair_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.name()).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count()
    }

    pub(crate) fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub(crate) fn flip_all_up(&mut self) {
        for card in self.cards.iter_mut() {
            card.flip_up();
        }
    }

    pub(crate) fn flip_all_down(&mut self) {
        for card in self.cards.iter_mut() {
            card.flip_down();
        }
    }
}

impl std::ops::Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Deal a shuffled deck with exactly two cards per catalog name.
///
/// Randomness comes only from `rng`; the same RNG state yields the same deck.
pub fn build_deck(catalog: &Catalog, rng: &mut GameRng, uids: &mut UidAllocator) -> Deck {
    let mut cards: Vec<Card> = Vec::with_capacity(catalog.deck_len());
    for _ in 0..2 {
        for name in catalog.iter() {
            cards.push(Card::new(uids.alloc(), name));
        }
    }

    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(names: &[&str], seed: u64) -> Deck {
        let catalog = Catalog::new(names.iter().copied()).unwrap();
        build_deck(&catalog, &mut GameRng::new(seed), &mut UidAllocator::new())
    }

    #[test]
    fn test_two_cards_per_name() {
        let deck = deal(&["bear", "fox", "lion"], 42);

        assert_eq!(deck.len(), 6);
        let counts = deck.pair_counts();
        assert_eq!(counts.len(), 3);
        assert_eq!(counts["bear"], 2);
        assert_eq!(counts["fox"], 2);
        assert_eq!(counts["lion"], 2);
    }

    #[test]
    fn test_cards_start_face_down() {
        let deck = deal(&["bear", "fox"], 1);

        assert!(deck.iter().all(|card| !card.is_flipped() && !card.is_matched()));
        assert_eq!(deck.matched_count(), 0);
    }

    #[test]
    fn test_uids_are_unique() {
        let deck = deal(&["bear", "fox", "rabbit", "lion"], 3);
        let mut ids: Vec<_> = deck.iter().map(Card::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_same_seed_same_deck() {
        assert_eq!(deal(&["a", "b", "c", "d"], 9), deal(&["a", "b", "c", "d"], 9));
    }

    #[test]
    fn test_shuffle_changes_order() {
        let names = ["a", "b", "c", "d", "e", "f"];
        let orders: std::collections::HashSet<Vec<String>> = (0..20)
            .map(|seed| deal(&names, seed).iter().map(|c| c.name().to_string()).collect())
            .collect();

        assert!(orders.len() > 1);
    }

    #[test]
    fn test_uids_continue_across_decks() {
        let catalog = Catalog::new(["bear"]).unwrap();
        let mut rng = GameRng::new(0);
        let mut uids = UidAllocator::new();

        let first = build_deck(&catalog, &mut rng, &mut uids);
        let second = build_deck(&catalog, &mut rng, &mut uids);

        assert!(first.iter().all(|a| second.iter().all(|b| a.id() != b.id())));
    }

    #[test]
    fn test_position_of() {
        let deck = deal(&["bear", "fox"], 5);
        let first = deck.position_of("bear", None).unwrap();
        let second = deck.position_of("bear", Some(first)).unwrap();

        assert_ne!(first, second);
        assert_eq!(deck[first].name(), "bear");
        assert_eq!(deck[second].name(), "bear");
        assert_eq!(deck.position_of("owl", None), None);
    }

    #[test]
    fn test_flip_all() {
        let mut deck = deal(&["bear", "fox"], 5);

        deck.flip_all_up();
        assert!(deck.iter().all(Card::is_flipped));

        deck.card_mut(0).unwrap().mark_matched();
        deck.flip_all_down();
        assert!(deck[0].is_flipped());
        assert_eq!(deck.iter().filter(|c| c.is_flipped()).count(), 1);
    }

    #[test]
    fn test_snapshot_clone_is_independent() {
        let mut deck = deal(&["bear", "fox"], 5);
        let snapshot = deck.clone();

        deck.card_mut(0).unwrap().flip_up();

        assert!(deck[0].is_flipped());
        assert!(!snapshot[0].is_flipped());
    }

    #[test]
    fn test_serialization() {
        let deck = deal(&["bear", "fox"], 5);
        let json = serde_json::to_string(&deck).unwrap();
        let deserialized: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, deserialized);
    }
}
