use crate::Card;
use serde::{Deserialize, Serialize};

pub const BLACKJACK: u8 = 21;

/// Calculate the value of a hand.
///
/// Non-ace cards are summed first. Each ace is then resolved on its own
/// against the running total: 11 if that keeps the total at or under 21,
/// otherwise 1. With several aces this is greedy, e.g. three aces count as
/// 11 + 1 + 1 = 13.
pub fn calculate_hand_value(cards: &[Card]) -> u8 {
    let mut total: u8 = cards
        .iter()
        .filter(|c| !c.is_ace())
        .map(|c| c.value())
        .fold(0, u8::saturating_add);

    for _ in cards.iter().filter(|c| c.is_ace()) {
        total = if total.saturating_add(11) <= BLACKJACK {
            total + 11
        } else {
            total.saturating_add(1)
        };
    }

    total
}

/// Check if a hand is busted
pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > BLACKJACK
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}
