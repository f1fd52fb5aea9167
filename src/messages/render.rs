//! Render state - data structure sent from App layer to UI for rendering

use crate::animation::RotationTransition;
use crate::die::{DieGlyph, DieState};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // Die
    pub face_value: u8,
    pub is_rolling: bool,
    pub rotation: f64,

    // Animation
    /// Number of rolls so far; a change means `transition` is new
    pub roll_count: u64,
    pub transition: Option<RotationTransition>,
}

impl RenderState {
    pub fn glyph(&self) -> DieGlyph {
        DieGlyph::for_face(self.face_value)
    }

    /// Result caption shown under the die
    pub fn caption(&self) -> String {
        format!("You rolled a {}", self.face_value)
    }
}

impl Default for RenderState {
    fn default() -> Self {
        let die = DieState::default();
        RenderState {
            face_value: die.face_value,
            is_rolling: die.is_rolling,
            rotation: die.rotation,
            roll_count: 0,
            transition: None,
        }
    }
}
