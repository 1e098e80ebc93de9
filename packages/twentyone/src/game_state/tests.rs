use super::*;
use crate::{Card, GameError, Rank, Suit};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn test_session_new() {
    let session = GameSession::new(Shoe::new());
    assert_eq!(session.state(), RoundState::NotStarted);
    assert_eq!(session.shoe().remaining(), 52);
    assert!(session.player_hand().is_empty());
    assert!(session.dealer_hand().is_empty());
    assert!(session.result().is_none());
}

#[test]
fn test_draw_pair_dealer_first() {
    let mut session = GameSession::new(Shoe::stacked(&[
        card(Rank::Two, Suit::Clubs),
        card(Rank::Nine, Suit::Hearts),
    ]));
    session.draw_pair().unwrap();

    assert_eq!(session.dealer_hand().cards(), &[card(Rank::Two, Suit::Clubs)]);
    assert_eq!(session.player_hand().cards(), &[card(Rank::Nine, Suit::Hearts)]);
    assert_eq!(session.shoe().remaining(), 50);
}

#[test]
fn test_draw_pair_needs_two_cards() {
    let mut shoe = Shoe::new();
    for _ in 0..51 {
        shoe.draw().unwrap();
    }
    let mut session = GameSession::new(shoe);

    assert_eq!(session.draw_pair(), Err(GameError::EmptyShoe));
    // Nothing was taken.
    assert_eq!(session.shoe().remaining(), 1);
    assert!(session.dealer_hand().is_empty());
    assert!(session.player_hand().is_empty());
}

#[test]
fn test_resolve_and_reset_round() {
    let mut session = GameSession::new(Shoe::new());
    session.draw_pair().unwrap();
    session.set_state(RoundState::AwaitingPlayerAction);
    session.resolve(RoundResult {
        outcome: Outcome::Tie,
        player_total: 10,
        dealer_total: 10,
    });
    assert_eq!(session.state(), RoundState::Resolved);
    assert!(session.result().is_some());

    session.reset_round();
    assert_eq!(session.state(), RoundState::NotStarted);
    assert!(session.result().is_none());
    assert!(session.player_hand().is_empty());
    assert!(session.dealer_hand().is_empty());
    // The shoe is not refilled between rounds.
    assert_eq!(session.shoe().remaining(), 50);
}

#[test]
fn test_score_line() {
    let result = RoundResult {
        outcome: Outcome::PlayerWins,
        player_total: 21,
        dealer_total: 18,
    };
    assert_eq!(result.score_line(), "Player: 21 || Dealer: 18");
}

#[test]
fn test_round_state_display() {
    assert_eq!(RoundState::NotStarted.to_string(), "not started");
    assert_eq!(
        RoundState::AwaitingPlayerAction.to_string(),
        "awaiting player action"
    );
    assert_eq!(RoundState::Resolved.to_string(), "resolved");
}
