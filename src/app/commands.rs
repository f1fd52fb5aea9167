//! Command handlers - business logic for processing UI events

use crate::app::AppState;

impl AppState {
    /// Roll the die and remember the rotation animation for the UI
    pub fn roll(&mut self) {
        let transition = self.die.roll_with(&mut self.rng);
        self.roll_count += 1;
        self.last_transition = Some(transition);

        tracing::info!(
            roll = self.roll_count,
            face = self.die.face_value,
            glyph = %self.die.glyph().symbol(),
            rolling = self.die.is_rolling,
            rotation = self.die.rotation,
            "Rolled die"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_updates_render_state() {
        let mut state = AppState::with_seed(3);
        let before = state.to_render_state();
        assert_eq!(before.roll_count, 0);
        assert_eq!(before.transition, None);

        state.roll();
        let after = state.to_render_state();
        assert_eq!(after.roll_count, 1);
        assert!(after.is_rolling);
        assert_eq!(after.rotation, 720.0);
        assert!((1..=6).contains(&after.face_value));

        let transition = after.transition.unwrap();
        assert_eq!(transition.from, 360.0);
        assert_eq!(transition.to, 720.0);
    }

    #[test]
    fn test_same_seed_same_faces() {
        let mut a = AppState::with_seed(99);
        let mut b = AppState::with_seed(99);
        for _ in 0..50 {
            a.roll();
            b.roll();
            assert_eq!(a.die, b.die);
        }
    }
}
