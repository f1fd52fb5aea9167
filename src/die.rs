//! Die state - the face value, rolling flag and accumulated rotation
//!
//! `DieState` is plain data. Rolling needs a random source and nothing else,
//! so it can be driven by the app actor or directly from tests.

use rand::Rng;

use crate::animation::RotationTransition;
use crate::constants::{DEGREES_PER_ROLL, INITIAL_FACE, INITIAL_ROTATION, ROLL_ANIMATION};

/// Number of faces on the die
pub const FACES: u8 = 6;

/// State of the on-screen die
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DieState {
    /// Face currently shown, always within `1..=FACES`
    pub face_value: u8,
    /// Selects the "rolling" color treatment; flips on every roll
    pub is_rolling: bool,
    /// Total rotation in degrees. Only ever grows.
    pub rotation: f64,
}

impl Default for DieState {
    fn default() -> Self {
        DieState {
            face_value: INITIAL_FACE,
            is_rolling: false,
            rotation: INITIAL_ROTATION,
        }
    }
}

impl DieState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll using the thread-local random generator
    pub fn roll(&mut self) {
        self.roll_with(&mut rand::rng());
    }

    /// Roll using the given random generator.
    ///
    /// Toggles the rolling flag, adds a full turn to the rotation and draws a
    /// new face uniformly from `1..=6`. Returns the animation the
    /// presentation layer should play for the rotation change.
    pub fn roll_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RotationTransition {
        let from = self.rotation;

        self.is_rolling = !self.is_rolling;
        self.rotation += DEGREES_PER_ROLL;
        self.face_value = rng.random_range(1..=FACES);

        RotationTransition::new(from, self.rotation, ROLL_ANIMATION)
    }

    pub fn glyph(&self) -> DieGlyph {
        DieGlyph::for_face(self.face_value)
    }
}

/// What to draw for a face value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DieGlyph {
    Face(u8),
    /// Fallback for a value outside `1..=6`
    Unknown,
}

impl DieGlyph {
    pub fn for_face(face: u8) -> DieGlyph {
        match face {
            1..=FACES => DieGlyph::Face(face),
            _ => DieGlyph::Unknown,
        }
    }

    /// Single-character symbol for the glyph
    pub fn symbol(&self) -> char {
        match self {
            DieGlyph::Face(1) => '⚀',
            DieGlyph::Face(2) => '⚁',
            DieGlyph::Face(3) => '⚂',
            DieGlyph::Face(4) => '⚃',
            DieGlyph::Face(5) => '⚄',
            DieGlyph::Face(6) => '⚅',
            DieGlyph::Face(_) | DieGlyph::Unknown => '?',
        }
    }

    /// Pip centers on a die spanning `-1.0..=1.0` on both axes, y pointing up
    pub fn pips(&self) -> &'static [(f64, f64)] {
        const C: f64 = 0.0;
        const O: f64 = 0.5;
        match self {
            DieGlyph::Face(1) => &[(C, C)],
            DieGlyph::Face(2) => &[(-O, O), (O, -O)],
            DieGlyph::Face(3) => &[(-O, O), (C, C), (O, -O)],
            DieGlyph::Face(4) => &[(-O, O), (O, O), (-O, -O), (O, -O)],
            DieGlyph::Face(5) => &[(-O, O), (O, O), (C, C), (-O, -O), (O, -O)],
            DieGlyph::Face(6) => &[(-O, O), (O, O), (-O, C), (O, C), (-O, -O), (O, -O)],
            DieGlyph::Face(_) | DieGlyph::Unknown => &[],
        }
    }
}
