use crate::{GameError, Hand, Outcome, Shoe};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    NotStarted,
    AwaitingPlayerAction,
    Resolved,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            RoundState::NotStarted => "not started",
            RoundState::AwaitingPlayerAction => "awaiting player action",
            RoundState::Resolved => "resolved",
        })
    }
}

/// Final totals of a round and who took it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub player_total: u8,
    pub dealer_total: u8,
}

impl RoundResult {
    pub fn score_line(&self) -> String {
        format!(
            "Player: {} || Dealer: {}",
            self.player_total, self.dealer_total
        )
    }
}

/// Everything one game owns: the shoe that spans rounds, both hands and the
/// round state. Only the controller mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    shoe: Shoe,
    player: Hand,
    dealer: Hand,
    state: RoundState,
    result: Option<RoundResult>,
}

impl GameSession {
    pub fn new(shoe: Shoe) -> Self {
        Self {
            shoe,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::NotStarted,
            result: None,
        }
    }

    pub fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn result(&self) -> Option<&RoundResult> {
        self.result.as_ref()
    }

    pub fn player_value(&self) -> u8 {
        self.player.value()
    }

    pub fn dealer_value(&self) -> u8 {
        self.dealer.value()
    }

    /// Draws one card to the dealer and then one to the player. Both cards are
    /// checked out before either hand changes.
    pub(crate) fn draw_pair(&mut self) -> Result<(), GameError> {
        if self.shoe.remaining() < 2 {
            return Err(GameError::EmptyShoe);
        }
        let dealer_card = self.shoe.draw()?;
        let player_card = self.shoe.draw()?;
        self.dealer.add_card(dealer_card);
        self.player.add_card(player_card);
        Ok(())
    }

    pub(crate) fn set_state(&mut self, state: RoundState) {
        self.state = state;
    }

    pub(crate) fn resolve(&mut self, result: RoundResult) {
        self.result = Some(result);
        self.state = RoundState::Resolved;
    }

    pub(crate) fn reset_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.result = None;
        self.state = RoundState::NotStarted;
    }

    pub(crate) fn replace_shoe(&mut self, shoe: Shoe) {
        self.shoe = shoe;
    }
}

#[cfg(test)]
mod tests;
