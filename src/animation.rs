//! Rotation animation
//!
//! The app layer declares *what* to animate with a [`RotationTransition`];
//! the UI owns an [`Animator`] that decides *where* the die is at a given
//! instant. State updates never wait on the animation.

use std::time::{Duration, Instant};

use crate::messages::RenderState;

/// Easing curve applied to a transition's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[allow(dead_code)] // Alternative curve; rolls use the default
    Linear,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `0.0..=1.0` to eased progress
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Instruction to animate the die rotation from one angle to another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTransition {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub easing: Easing,
}

impl RotationTransition {
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        RotationTransition {
            from,
            to,
            duration,
            easing: Easing::default(),
        }
    }

    /// Angle after `elapsed` time has passed since the transition began
    pub fn sample(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }
}

/// Presentation-side playback of rotation transitions
#[derive(Debug, Clone)]
pub struct Animator {
    resting: f64,
    active: Option<(RotationTransition, Instant)>,
}

impl Animator {
    /// Create an animator showing `angle` with nothing in flight
    pub fn new(angle: f64) -> Self {
        Animator {
            resting: angle,
            active: None,
        }
    }

    /// Begin playing `transition` at `now`.
    ///
    /// If a previous transition is still running, the new one starts from
    /// the angle currently on screen instead of its declared `from`.
    pub fn start(&mut self, mut transition: RotationTransition, now: Instant) {
        if self.is_animating(now) {
            transition.from = self.angle(now);
        }
        self.resting = transition.to;
        self.active = Some((transition, now));
    }

    /// Follow a new render snapshot.
    ///
    /// A changed `roll_count` starts its transition; a repeated snapshot
    /// leaves the running animation alone; no transition snaps to `rotation`.
    pub fn apply(&mut self, current: &RenderState, next: &RenderState, now: Instant) {
        match next.transition {
            Some(transition) if next.roll_count != current.roll_count => {
                self.start(transition, now);
            }
            Some(_) => {}
            None => self.snap(next.rotation),
        }
    }

    /// Jump to `angle` without animating
    pub fn snap(&mut self, angle: f64) {
        self.resting = angle;
        self.active = None;
    }

    /// Angle to draw at `now`
    pub fn angle(&self, now: Instant) -> f64 {
        match &self.active {
            Some((transition, started)) => {
                transition.sample(now.saturating_duration_since(*started))
            }
            None => self.resting,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        match &self.active {
            Some((transition, started)) => {
                now.saturating_duration_since(*started) < transition.duration
            }
            None => false,
        }
    }
}
