use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::Suit;

/// The slice of game state that transitions are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleView {
    pub phase: Phase,
    pub round_no: u8,
    pub player_count: u8,
    pub turn: Option<PlayerId>,
    pub trump_suit: Option<Suit>,
    /// (round_no, trick_no, winner) of the most recently resolved trick.
    pub last_trick: Option<(u8, u8, PlayerId)>,
    pub last_scored_round: Option<u8>,
}

impl LifecycleView {
    pub fn of(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            round_no: state.round_no,
            player_count: state.players.len() as u8,
            turn: state.turn,
            trump_suit: state.round.trump_suit(),
            last_trick: state
                .round
                .last_trick
                .as_ref()
                .map(|t| (t.round_no, t.trick_no, t.winner)),
            last_scored_round: state.history.last().map(|s| s.round_no),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Explicit: a seat was filled in the lobby.
    PlayerJoined { player_id: PlayerId },

    /// Edge-triggered: NotStarted -> anything else.
    GameStarted,

    /// Edge-triggered: the designated chooser settled trump.
    TrumpChosen { suit: Suit },

    /// Edge-triggered: a trick was resolved.
    TrickWon {
        round_no: u8,
        trick_no: u8,
        winner: PlayerId,
    },

    /// Edge-triggered: a round was scored.
    RoundScored { round_no: u8 },

    /// Edge-triggered: a new round was dealt.
    RoundStarted { round_no: u8 },

    /// Edge-triggered: the final round was scored.
    GameEnded,

    /// Edge-triggered: the turn became a specific player, or was handed
    /// back to the same player by a resolved trick or a new round.
    TurnBecame { player_id: PlayerId },
}

/// Derive domain transitions from before/after lifecycle state, in the order
/// they happened.
pub fn derive_game_transitions(
    before: &LifecycleView,
    after: &LifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Seats filled
    for player_id in before.player_count..after.player_count {
        transitions.push(GameTransition::PlayerJoined { player_id });
    }

    // 2. Game start (NotStarted -> !NotStarted)
    if before.phase == Phase::NotStarted && after.phase != Phase::NotStarted {
        transitions.push(GameTransition::GameStarted);
    }

    // 3. Trump chosen within the same round
    if before.phase == Phase::ChooseTrump && after.round_no == before.round_no {
        if let Some(suit) = after.trump_suit {
            transitions.push(GameTransition::TrumpChosen { suit });
        }
    }

    // 4. Trick resolved
    if let Some((round_no, trick_no, winner)) = after.last_trick {
        if before.last_trick != after.last_trick {
            transitions.push(GameTransition::TrickWon {
                round_no,
                trick_no,
                winner,
            });
        }
    }

    // 5. Round scored
    if let Some(round_no) = after.last_scored_round {
        if before.last_scored_round != Some(round_no) {
            transitions.push(GameTransition::RoundScored { round_no });
        }
    }

    // 6. Round dealt
    if after.round_no > before.round_no {
        transitions.push(GameTransition::RoundStarted {
            round_no: after.round_no,
        });
    }

    // 7. Game end (!GameOver -> GameOver)
    if before.phase != Phase::GameOver && after.phase == Phase::GameOver {
        transitions.push(GameTransition::GameEnded);
    }

    // 8. Turn handed out. A trick winner or the first seat of a new round may
    // be the seat that just acted, so a lifecycle step re-announces the turn.
    if let Some(player_id) = after.turn {
        let stepped = before.last_trick != after.last_trick
            || before.round_no != after.round_no
            || before.phase != after.phase;
        if before.turn != Some(player_id) || stepped {
            transitions.push(GameTransition::TurnBecame { player_id });
        }
    }

    transitions
}
