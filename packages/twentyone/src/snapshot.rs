use crate::{Card, Outcome, RoundState};
use serde::{Deserialize, Serialize};

/// A dealer card as the player is allowed to see it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardView {
    FaceUp(Card),
    Hidden,
}

impl CardView {
    pub fn card(&self) -> Option<Card> {
        match self {
            CardView::FaceUp(card) => Some(*card),
            CardView::Hidden => None,
        }
    }
}

/// Read-only view of the table handed to the presentation layer after every
/// command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub dealer_cards: Vec<CardView>,
    pub player_cards: Vec<Card>,
    pub player_total: u8,
    /// Only known once the round is resolved
    pub dealer_total: Option<u8>,
    pub remaining: usize,
    pub state: RoundState,
    pub outcome: Option<Outcome>,
    pub score_line: Option<String>,
    pub can_deal: bool,
    pub can_hit: bool,
    pub can_stand: bool,
    pub can_new_round: bool,
}

impl TableSnapshot {
    /// The status line shown above the table.
    pub fn announcement(&self) -> String {
        match (self.state, self.outcome, &self.score_line) {
            (RoundState::Resolved, Some(outcome), Some(score)) => format!("{outcome} {score}"),
            (RoundState::AwaitingPlayerAction, _, _) => {
                format!("Player hand value: {}", self.player_total)
            }
            _ => String::new(),
        }
    }
}
