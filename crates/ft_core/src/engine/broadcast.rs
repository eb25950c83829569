use std::sync::Arc;

use crate::models::MatchId;

/// Receives every message a match publishes.
///
/// Delivery is synchronous on the simulating thread, so implementations
/// should return quickly. `source` identifies the match, letting one
/// observer follow a whole tournament.
pub trait MatchObserver: Send + Sync {
    fn receive(&self, source: &MatchId, message: &str);
}

/// An explicit subscriber list with synchronous, in-order delivery.
///
/// Subscribers are compared by pointer identity: unsubscribing removes
/// every entry of the exact observer that was subscribed, and subscribing
/// the same observer twice means it hears everything twice.
#[derive(Default)]
pub struct Broadcast {
    subscribers: Vec<Arc<dyn MatchObserver>>,
}

impl Broadcast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Arc<dyn MatchObserver>) {
        self.subscribers.push(observer);
    }

    pub fn unsubscribe(&mut self, observer: &Arc<dyn MatchObserver>) {
        self.subscribers
            .retain(|existing| !Arc::ptr_eq(existing, observer));
    }

    /// Hand `message` to every subscriber, in subscription order.
    pub fn deliver(&self, source: &MatchId, message: &str) {
        for subscriber in &self.subscribers {
            subscriber.receive(source, message);
        }
    }

    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
