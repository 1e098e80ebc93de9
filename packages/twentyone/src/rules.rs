use crate::hand::BLACKJACK;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    NoWinner,
    Tie,
    PlayerWins,
    DealerWins,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Outcome::NoWinner => "No winner!",
            Outcome::Tie => "It's a tie!",
            Outcome::PlayerWins => "Player wins!",
            Outcome::DealerWins => "Dealer wins!",
        })
    }
}

/// Decide the round from both final totals. Checks run in order, so two
/// busted hands are no winner even when equal.
pub fn decide_winner(dealer_value: u8, player_value: u8) -> Outcome {
    let dealer_bust = dealer_value > BLACKJACK;
    let player_bust = player_value > BLACKJACK;

    if dealer_bust && player_bust {
        Outcome::NoWinner
    } else if dealer_value == player_value {
        Outcome::Tie
    } else if dealer_bust {
        Outcome::PlayerWins
    } else if player_bust {
        Outcome::DealerWins
    } else if player_value > dealer_value {
        Outcome::PlayerWins
    } else {
        Outcome::DealerWins
    }
}

/// Table configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Seed for the shuffling RNG. `None` seeds from OS entropy.
    pub shuffle_seed: Option<u64>,

    /// Hide every dealer card but the first until the round resolves
    pub mask_dealer_hole_cards: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            shuffle_seed: None,
            mask_dealer_hole_cards: true,
        }
    }
}

impl GameRules {
    /// Reproducible shoes
    pub fn seeded(seed: u64) -> Self {
        Self {
            shuffle_seed: Some(seed),
            ..Self::default()
        }
    }

    /// Dealer cards always face up
    pub fn open_hand() -> Self {
        Self {
            mask_dealer_hole_cards: false,
            ..Self::default()
        }
    }
}
