use crate::RoundState;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Commands accepted by the round controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Deal,
    Hit,
    Stand,
    NewRound,
    NewGame,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Action::Deal => "deal",
            Action::Hit => "hit",
            Action::Stand => "stand",
            Action::NewRound => "start a new round",
            Action::NewGame => "start a new game",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("No cards left in the shoe")]
    EmptyShoe,
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),
    #[error("Cannot {action} while the round is {state}")]
    InvalidTransition { action: Action, state: RoundState },
    #[error("Hit disabled: {0}")]
    HitDisabled(&'static str),
}
