//! The state of a single round.

use crate::card::{Card, CardFace};
use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::{RoundResult, Winner};

use super::dealer::{DealerDecision, decide};
use super::state::{GameState, Seat};

/// Next move of a dealer turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer must draw another card.
    Draw,
    /// The round is resolved.
    Done(RoundResult),
}

/// All mutable state of one round of blackjack.
///
/// A round is only ever replaced as a whole when a new game starts. The
/// transition methods are synchronous; drawing cards is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameRound {
    state: GameState,
    player_hand: Hand,
    dealer_hand: Hand,
    player_turn_ended: bool,
    is_game_over: bool,
    dealer_wins: bool,
    /// Player value frozen when the dealer turn begins.
    target_value: Option<u16>,
}

impl GameRound {
    /// Creates an empty round awaiting its deal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: GameState::AwaitingDeal,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            player_turn_ended: false,
            is_game_over: false,
            dealer_wins: false,
            target_value: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's full hand, hole card included.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns whether the player's turn has ended.
    #[must_use]
    pub const fn player_turn_ended(&self) -> bool {
        self.player_turn_ended
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Returns the winner once the round is over.
    #[must_use]
    pub const fn winner(&self) -> Option<Winner> {
        if !self.is_game_over {
            None
        } else if self.dealer_wins {
            Some(Winner::Dealer)
        } else {
            Some(Winner::Player)
        }
    }

    /// Returns the player's hand value.
    #[must_use]
    pub fn player_value(&self) -> u16 {
        self.player_hand.value()
    }

    /// Returns the dealer's hand value, hole card included.
    #[must_use]
    pub fn dealer_value(&self) -> u16 {
        self.dealer_hand.value()
    }

    /// Returns the dealer's value as the player may see it.
    ///
    /// Until the player's turn ends only the up card is counted.
    #[must_use]
    pub fn dealer_visible_value(&self) -> u16 {
        if self.player_turn_ended {
            self.dealer_value()
        } else {
            self.dealer_hand
                .first()
                .map_or(0, |card| u16::from(card.value()))
        }
    }

    /// Returns the dealer's cards as they should be displayed.
    ///
    /// Every card after the first stays face down until the player's turn
    /// ends, unless `reveal_all` is set. Scoring is unaffected.
    #[must_use]
    pub fn dealer_faces(&self, reveal_all: bool) -> Vec<CardFace> {
        let reveal = reveal_all || self.player_turn_ended;
        self.dealer_hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if reveal || index == 0 {
                    CardFace::Up(card.clone())
                } else {
                    CardFace::Down
                }
            })
            .collect()
    }

    /// Returns the final result once the round is resolved.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        if self.state != GameState::Resolved {
            return None;
        }

        let winner = self.winner()?;
        Some(RoundResult {
            winner,
            player_value: self.player_value(),
            dealer_value: self.dealer_value(),
            player_bust: self.player_hand.is_bust(),
            dealer_bust: self.dealer_hand.is_bust(),
        })
    }

    /// Adds a card from the initial deal.
    pub(crate) fn push_deal(&mut self, seat: Seat, card: Card) {
        match seat {
            Seat::Player => self.player_hand.add_card(card),
            Seat::Dealer => self.dealer_hand.add_card(card),
        }
    }

    /// Marks the initial deal as complete.
    pub(crate) const fn finish_deal(&mut self) {
        self.state = GameState::PlayerTurn;
    }

    pub(crate) const fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if matches!(self.state, GameState::PlayerTurn) {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Adds a hit card to the player's hand.
    ///
    /// On bust the player's turn ends and the round is decided for the
    /// dealer; it still passes through the dealer turn to be resolved.
    /// Returns whether the player busted.
    pub(crate) fn push_hit(&mut self, card: Card) -> Result<bool, ActionError> {
        self.ensure_player_turn()?;
        self.player_hand.add_card(card);

        let bust = self.player_hand.is_bust();
        if bust {
            self.player_turn_ended = true;
            self.dealer_wins = true;
            self.is_game_over = true;
            self.state = GameState::DealerTurn;
        }
        Ok(bust)
    }

    /// Ends the player's turn and hands play to the dealer.
    ///
    /// The player's value is frozen here for the rest of the dealer turn.
    pub(crate) fn end_player_turn(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.player_turn_ended = true;
        self.target_value = Some(self.player_value());
        self.state = GameState::DealerTurn;
        Ok(())
    }

    /// Evaluates the dealer's next move, resolving the round when final.
    pub(crate) fn dealer_step(&mut self) -> Result<DealerStep, ActionError> {
        match self.state {
            GameState::Resolved => {}
            GameState::DealerTurn if self.is_game_over => self.state = GameState::Resolved,
            GameState::DealerTurn => {
                let target = self.target_value.unwrap_or_else(|| self.player_value());
                let decision = decide(self.dealer_value(), target);
                if decision == DealerDecision::Draw {
                    return Ok(DealerStep::Draw);
                }
                self.is_game_over = true;
                self.dealer_wins = decision.dealer_wins();
                self.state = GameState::Resolved;
            }
            GameState::AwaitingDeal | GameState::PlayerTurn => {
                return Err(ActionError::InvalidState);
            }
        }

        self.result()
            .map(DealerStep::Done)
            .ok_or(ActionError::InvalidState)
    }

    /// Adds a card drawn during the dealer turn.
    pub(crate) fn push_dealer(&mut self, card: Card) {
        self.dealer_hand.add_card(card);
    }
}
