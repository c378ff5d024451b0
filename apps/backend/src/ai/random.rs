//! Random AI player - makes random legal moves.
//!
//! Baseline opponent for simulated games and tests; seed it for
//! reproducible play.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::player_view::{LegalActions, PlayerView};

/// AI that picks uniformly among the legal actions in its view.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";

    /// `Some(seed)` for reproducible choices, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick<T: Copy>(&self, options: &[T], what: &'static str) -> Result<T, AiError> {
        let mut rng = self.rng.lock();
        options
            .choose(&mut *rng)
            .copied()
            .ok_or(AiError::NoLegalAction(what))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_trump(&self, view: &PlayerView) -> Result<usize, AiError> {
        let LegalActions::ChooseTrump { options } = &view.legal_actions else {
            return Err(AiError::NoLegalAction("trump choice"));
        };
        let ids: Vec<usize> = options.iter().map(|o| o.id).collect();
        self.pick(&ids, "trump choice")
    }

    fn choose_prediction(&self, view: &PlayerView) -> Result<u8, AiError> {
        let LegalActions::Predict { options } = &view.legal_actions else {
            return Err(AiError::NoLegalAction("prediction"));
        };
        self.pick(options, "prediction")
    }

    fn choose_card(&self, view: &PlayerView) -> Result<usize, AiError> {
        let LegalActions::PlayCard { options } = &view.legal_actions else {
            return Err(AiError::NoLegalAction("card"));
        };
        let indices: Vec<usize> = options.iter().map(|o| o.index).collect();
        self.pick(&indices, "card")
    }
}
