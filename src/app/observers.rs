//! Subscribe/notify for render state
//!
//! Every subscriber gets its own channel and receives each snapshot the
//! app publishes. Subscribers that dropped their receiver are pruned on the
//! next notify.

use tokio::sync::mpsc;

use crate::messages::RenderState;

#[derive(Default)]
pub struct Observers {
    subscribers: Vec<mpsc::UnboundedSender<RenderState>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<RenderState> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.attach(tx);
        rx
    }

    /// Register an existing sender as a subscriber
    pub fn attach(&mut self, tx: mpsc::UnboundedSender<RenderState>) {
        self.subscribers.push(tx);
        tracing::debug!(subscribers = self.subscribers.len(), "Subscriber added");
    }

    /// Send `state` to every live subscriber
    pub fn notify(&mut self, state: &RenderState) {
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(state.clone()).is_ok());
        if self.subscribers.len() != before {
            tracing::debug!(
                dropped = before - self.subscribers.len(),
                remaining = self.subscribers.len(),
                "Pruned closed subscribers"
            );
        }
    }

    #[allow(dead_code)] // Used by tests to check pruning
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subscriber_is_notified() {
        let mut observers = Observers::new();
        let mut a = observers.subscribe();
        let mut b = observers.subscribe();

        let state = RenderState::default();
        observers.notify(&state);

        assert_eq!(a.try_recv().unwrap(), state);
        assert_eq!(b.try_recv().unwrap(), state);
        assert!(a.try_recv().is_err());
    }

    #[test]
    fn test_closed_subscriber_is_pruned() {
        let mut observers = Observers::new();
        let mut kept = observers.subscribe();
        let dropped = observers.subscribe();
        assert_eq!(observers.len(), 2);

        drop(dropped);
        observers.notify(&RenderState::default());

        assert_eq!(observers.len(), 1);
        assert!(kept.try_recv().is_ok());
    }

    #[test]
    fn test_notify_without_subscribers() {
        let mut observers = Observers::new();
        observers.notify(&RenderState::default());
        assert!(observers.is_empty());
    }
}
