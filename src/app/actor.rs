//! App actor - message loop processing UI events

use tokio::sync::mpsc;

use crate::app::observers::Observers;
use crate::app::state::AppState;
use crate::messages::{RenderState, UiEvent};

/// App actor that owns the die and publishes render state
pub struct AppActor {
    state: AppState,
    observers: Observers,
}

impl AppActor {
    pub fn new(render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        Self::with_state(AppState::new(), render_tx)
    }

    pub fn with_state(state: AppState, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        let mut observers = Observers::new();
        observers.attach(render_tx);
        AppActor { state, observers }
    }

    /// Add another render state subscriber before the actor is started
    #[allow(dead_code)] // Reserved for extra views; the binary has one
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<RenderState> {
        self.observers.subscribe()
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // Send initial render state
        self.observers.notify(&self.state.to_render_state());

        while let Some(event) = ui_rx.recv().await {
            if self.handle_ui_event(event) {
                tracing::info!(rolls = self.state.roll_count, "Quit requested");
                break;
            }
            self.observers.notify(&self.state.to_render_state());
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Roll => self.state.roll(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
