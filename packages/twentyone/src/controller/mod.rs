use crate::hand::BLACKJACK;
use crate::{
    decide_winner, Action, CardView, GameError, GameRules, GameSession, RoundResult, RoundState,
    Shoe, TableSnapshot,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Drives one game session through its rounds.
///
/// Every command validates before it touches the session, so a rejected
/// command leaves the table exactly as it was. On success the command returns
/// a fresh [`TableSnapshot`].
#[derive(Debug, Clone)]
pub struct RoundController {
    session: GameSession,
    rules: GameRules,
    rng: ChaCha8Rng,
}

impl RoundController {
    /// New game on a freshly shuffled shoe.
    pub fn new(rules: GameRules) -> Self {
        let mut rng = rng_for(&rules);
        let shoe = Shoe::shuffled(&mut rng);
        Self {
            session: GameSession::new(shoe),
            rules,
            rng,
        }
    }

    /// New game on a prepared shoe. Later `new_game` calls still shuffle
    /// with the rules' RNG.
    pub fn with_shoe(rules: GameRules, shoe: Shoe) -> Self {
        Self {
            session: GameSession::new(shoe),
            rng: rng_for(&rules),
            rules,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn state(&self) -> RoundState {
        self.session.state()
    }

    pub fn can_deal(&self) -> bool {
        self.state() == RoundState::NotStarted && self.session.shoe().remaining() >= 2
    }

    pub fn can_hit(&self) -> bool {
        self.state() == RoundState::AwaitingPlayerAction && self.hit_block().is_none()
    }

    pub fn can_stand(&self) -> bool {
        self.state() == RoundState::AwaitingPlayerAction
            && !self.session.player_hand().is_empty()
            && !self.session.dealer_hand().is_empty()
    }

    pub fn can_new_round(&self) -> bool {
        self.state() == RoundState::Resolved
    }

    /// One card to the dealer, one to the player.
    pub fn deal(&mut self) -> Result<TableSnapshot, GameError> {
        self.expect_state(Action::Deal, RoundState::NotStarted)?;
        self.session.draw_pair()?;
        self.session.set_state(RoundState::AwaitingPlayerAction);

        log::debug!(
            "Dealt: player {}, dealer {}, {} cards left",
            self.session.player_value(),
            self.session.dealer_value(),
            self.session.shoe().remaining()
        );
        Ok(self.snapshot())
    }

    /// Both hands take a card. The dealer draws in lockstep with the player.
    pub fn hit(&mut self) -> Result<TableSnapshot, GameError> {
        self.expect_state(Action::Hit, RoundState::AwaitingPlayerAction)?;
        if let Some(reason) = self.hit_block() {
            return Err(GameError::HitDisabled(reason));
        }
        self.session.draw_pair()?;

        log::debug!(
            "Hit: player {}, dealer {}, {} cards left",
            self.session.player_value(),
            self.session.dealer_value(),
            self.session.shoe().remaining()
        );
        if !self.can_hit() {
            log::debug!("Hitting disabled, player must stand");
        }
        Ok(self.snapshot())
    }

    pub fn stand(&mut self) -> Result<TableSnapshot, GameError> {
        if self.session.player_hand().is_empty() || self.session.dealer_hand().is_empty() {
            return Err(GameError::InvalidState("hand sum is zero"));
        }
        self.expect_state(Action::Stand, RoundState::AwaitingPlayerAction)?;

        let player_total = self.session.player_value();
        let dealer_total = self.session.dealer_value();
        let result = RoundResult {
            outcome: decide_winner(dealer_total, player_total),
            player_total,
            dealer_total,
        };
        log::info!("{} {}", result.outcome, result.score_line());
        self.session.resolve(result);
        Ok(self.snapshot())
    }

    /// Clear both hands and keep playing from the same shoe.
    pub fn new_round(&mut self) -> Result<TableSnapshot, GameError> {
        self.expect_state(Action::NewRound, RoundState::Resolved)?;
        self.session.reset_round();

        log::debug!(
            "New round, {} cards left",
            self.session.shoe().remaining()
        );
        Ok(self.snapshot())
    }

    /// Start over with a full, reshuffled shoe. Allowed from any state.
    pub fn new_game(&mut self) -> TableSnapshot {
        self.session.reset_round();
        self.session.replace_shoe(Shoe::shuffled(&mut self.rng));

        log::info!("New game, shoe reshuffled");
        self.snapshot()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        let state = self.state();
        let masked = state == RoundState::AwaitingPlayerAction && self.rules.mask_dealer_hole_cards;
        let dealer_cards = self
            .session
            .dealer_hand()
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if masked && i > 0 {
                    CardView::Hidden
                } else {
                    CardView::FaceUp(*card)
                }
            })
            .collect();
        let result = self.session.result();

        TableSnapshot {
            dealer_cards,
            player_cards: self.session.player_hand().cards().to_vec(),
            player_total: self.session.player_value(),
            dealer_total: result.map(|r| r.dealer_total),
            remaining: self.session.shoe().remaining(),
            state,
            outcome: result.map(|r| r.outcome),
            score_line: result.map(RoundResult::score_line),
            can_deal: self.can_deal(),
            can_hit: self.can_hit(),
            can_stand: self.can_stand(),
            can_new_round: self.can_new_round(),
        }
    }

    fn expect_state(&self, action: Action, expected: RoundState) -> Result<(), GameError> {
        let state = self.state();
        if state != expected {
            return Err(GameError::InvalidTransition { action, state });
        }
        Ok(())
    }

    fn hit_block(&self) -> Option<&'static str> {
        if self.session.player_value() >= BLACKJACK {
            Some("player is at or over 21")
        } else if self.session.shoe().remaining() < 2 {
            Some("not enough cards left in the shoe")
        } else {
            None
        }
    }
}

fn rng_for(rules: &GameRules) -> ChaCha8Rng {
    match rules.shuffle_seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
