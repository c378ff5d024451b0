//! Player view of game state - what information is visible to one player.
//!
//! [`PlayerView`] is everything a client may see at a decision point: public
//! table state, the player's own hand (never anyone else's) and the exact set
//! of legal actions, computed with the same rules the engine enforces. Clients
//! and AI players should never re-derive legality themselves.

use serde::Serialize;

use crate::domain::bidding::{legal_predictions, legal_trump_suits};
use crate::domain::state::{CompletedTrick, GameState, Phase, PlayerId, RoundSummary};
use crate::domain::tricks::legal_card_indices;
use crate::domain::{Card, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayedCard {
    pub player: String,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrickView {
    pub round_no: u8,
    pub trick_no: u8,
    pub plays: Vec<PlayedCard>,
    pub winner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuitOption {
    /// Index to pass to `choose_trump`.
    pub id: usize,
    pub suit: Suit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardOption {
    /// Hand index to pass to `play_card`.
    pub index: usize,
    pub card: Card,
}

/// What the viewing player may do right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LegalActions {
    /// Not this player's turn (or the game is not running).
    None,
    ChooseTrump { options: Vec<SuitOption> },
    Predict { options: Vec<u8> },
    PlayCard { options: Vec<CardOption> },
}

impl LegalActions {
    pub fn is_none(&self) -> bool {
        matches!(self, LegalActions::None)
    }
}

/// Information visible to one player.
///
/// Per-seat vectors (`scores`, `predictions`, `tricks_won`) are indexed like
/// `players`, i.e. in join order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    pub player: String,
    pub phase: Phase,
    pub round_no: u8,
    pub final_round: u8,
    pub capacity: u8,
    pub players: Vec<String>,
    pub scores: Vec<i32>,
    pub predictions: Vec<Option<u8>>,
    pub tricks_won: Vec<u8>,
    /// Effective trump card; `None` for a no-trump round or while trump is
    /// being chosen.
    pub trump: Option<Card>,
    /// Card turned up after dealing, even when it set no trump.
    pub turned_card: Option<Card>,
    pub trump_chooser: Option<String>,
    /// Seats in playing order for this round.
    pub turn_order: Vec<String>,
    pub played_cards: Vec<PlayedCard>,
    pub current_trick: Vec<PlayedCard>,
    pub last_trick: Option<TrickView>,
    /// Your hand only.
    pub hand: Vec<Card>,
    pub current_player: Option<String>,
    pub is_your_turn: bool,
    pub legal_actions: LegalActions,
    pub history: Vec<RoundSummary>,
}

/// Legal actions for `who` in the current state.
pub fn legal_actions(state: &GameState, who: PlayerId) -> LegalActions {
    if state.turn != Some(who) {
        return LegalActions::None;
    }
    match state.phase {
        Phase::NotStarted | Phase::GameOver => LegalActions::None,
        Phase::ChooseTrump => LegalActions::ChooseTrump {
            options: legal_trump_suits(state, who)
                .into_iter()
                .map(|suit| SuitOption {
                    id: suit.index(),
                    suit,
                })
                .collect(),
        },
        Phase::Prediction => LegalActions::Predict {
            options: legal_predictions(state, who).into_iter().map(|p| p.0).collect(),
        },
        Phase::Playing { .. } => {
            let hand = &state.hands[who as usize];
            LegalActions::PlayCard {
                options: legal_card_indices(state, who)
                    .into_iter()
                    .map(|index| CardOption {
                        index,
                        card: hand[index],
                    })
                    .collect(),
            }
        }
    }
}

fn name(state: &GameState, seat: PlayerId) -> String {
    state.player_name(seat).unwrap_or_default().to_string()
}

fn played(state: &GameState, plays: &[(PlayerId, Card)]) -> Vec<PlayedCard> {
    plays
        .iter()
        .map(|&(seat, card)| PlayedCard {
            player: name(state, seat),
            card,
        })
        .collect()
}

fn trick_view(state: &GameState, trick: &CompletedTrick) -> TrickView {
    TrickView {
        round_no: trick.round_no,
        trick_no: trick.trick_no,
        plays: played(state, &trick.plays),
        winner: name(state, trick.winner),
    }
}

/// Build the view for seat `who`.
pub fn player_view(state: &GameState, who: PlayerId) -> PlayerView {
    PlayerView {
        player: name(state, who),
        phase: state.phase,
        round_no: state.round_no,
        final_round: state.final_round(),
        capacity: state.capacity,
        players: state.players.clone(),
        scores: state.scores_total.clone(),
        predictions: state.round.predictions.clone(),
        tricks_won: state.round.tricks_won.clone(),
        trump: state.round.trump,
        turned_card: state.round.turned_card,
        trump_chooser: state.round.trump_chooser.map(|s| name(state, s)),
        turn_order: state.turn_order.iter().map(|&s| name(state, s)).collect(),
        played_cards: played(state, &state.round.played),
        current_trick: played(state, &state.round.trick_plays),
        last_trick: state
            .round
            .last_trick
            .as_ref()
            .map(|t| trick_view(state, t)),
        hand: state.hands.get(who as usize).cloned().unwrap_or_default(),
        current_player: state.turn.map(|s| name(state, s)),
        is_your_turn: state.turn == Some(who),
        legal_actions: legal_actions(state, who),
        history: state.history.clone(),
    }
}
