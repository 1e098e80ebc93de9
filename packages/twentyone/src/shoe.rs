use crate::{Card, GameError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const SHOE_SIZE: usize = 52;

/// The cards still available to draw. The top of the shoe is the end of the
/// vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// All 52 cards in canonical order, unshuffled.
    pub fn new() -> Self {
        let cards = (0..SHOE_SIZE).filter_map(Card::from_index).collect();
        Self { cards }
    }

    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut shoe = Self::new();
        shoe.shuffle(rng);
        shoe
    }

    /// Full shoe whose next draws are `top`, in order. The remaining cards sit
    /// below in canonical order.
    pub fn stacked(top: &[Card]) -> Self {
        let mut on_top: Vec<Card> = Vec::with_capacity(top.len());
        for card in top {
            if !on_top.contains(card) {
                on_top.push(*card);
            }
        }

        let mut cards: Vec<Card> = (0..SHOE_SIZE)
            .filter_map(Card::from_index)
            .filter(|c| !on_top.contains(c))
            .rev()
            .collect();
        cards.extend(on_top.into_iter().rev());
        Self { cards }
    }

    /// Fisher-Yates over the current contents.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyShoe)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}
