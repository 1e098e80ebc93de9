mod card;
mod controller;
mod error;
mod game_state;
mod hand;
mod rules;
mod shoe;
mod snapshot;

pub use card::{Card, Rank, Suit};
pub use controller::RoundController;
pub use error::{Action, GameError};
pub use game_state::{GameSession, RoundResult, RoundState};
pub use hand::{calculate_hand_value, is_busted, Hand, BLACKJACK};
pub use rules::{decide_winner, GameRules, Outcome};
pub use shoe::{Shoe, SHOE_SIZE};
pub use snapshot::{CardView, TableSnapshot};
