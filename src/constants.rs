//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Application name
pub const APP_NAME: &str = "Dice Roller";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Heading shown above the die
pub const TITLE: &str = "Roll the die!!!";

/// Label on the roll button
pub const ROLL_LABEL: &str = "Roll";

/// Face shown before the first roll
pub const INITIAL_FACE: u8 = 1;

/// Rotation (degrees) applied to the die before the first roll
pub const INITIAL_ROTATION: f64 = 360.0;

/// Rotation added by every roll
pub const DEGREES_PER_ROLL: f64 = 360.0;

/// How long the spin animation of a roll takes
pub const ROLL_ANIMATION: Duration = Duration::from_millis(350);

/// Input poll timeout; also the redraw rate while animating
pub const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Log file written to the working directory
pub const LOG_FILE: &str = "dice-roller.log";
