//! # Dice Roller
//!
//! A single-screen terminal dice roller.
//!
//! ## Features
//! - Six-sided die with random, uniformly distributed faces
//! - Spin animation on every roll
//! - Color change between rolls
//! - Mouse and keyboard activation of the Roll button
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous rendering and animation playback
//! - App Layer - owns the die, publishes render state to subscribers

pub mod animation;
pub mod app;
pub mod constants;
pub mod die;
pub mod messages;
pub mod ui;

// Re-export commonly used types
pub use animation::{Animator, Easing, RotationTransition};
pub use app::{AppActor, AppState, Observers};
pub use die::{DieGlyph, DieState};
pub use messages::{RenderState, UiEvent};
