//! App layer - central state management and command processing
//!
//! The App actor receives UI events, updates state, and notifies
//! subscribers with fresh render state.

pub mod state;
pub mod actor;
pub mod commands;
pub mod observers;

pub use state::AppState;
pub use actor::AppActor;
pub use observers::Observers;
