//! App state - pure data structure with no I/O logic

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::RotationTransition;
use crate::die::DieState;
use crate::messages::RenderState;

/// Main application state - pure data, no I/O
pub struct AppState {
    pub die: DieState,
    pub rng: StdRng,

    // Animation bookkeeping for the UI
    pub roll_count: u64,
    pub last_transition: Option<RotationTransition>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// State with a reproducible roll sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        AppState {
            die: DieState::new(),
            rng,
            roll_count: 0,
            last_transition: None,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            face_value: self.die.face_value,
            is_rolling: self.die.is_rolling,
            rotation: self.die.rotation,
            roll_count: self.roll_count,
            transition: self.last_transition,
        }
    }
}
