//! Page-to-panel signal bus.
//!
//! DESIGN
//! ======
//! The static page and the assistant panel do not know about each other.
//! The hero input publishes [`Signal::Open`]; the app root relays it as
//! [`Signal::SubmitQuery`] once the assistant state exists; the panel
//! subscribes to that. Subscribers are called outside the lock, so a
//! handler may publish.

#[cfg(test)]
#[path = "bus_test.rs"]
mod bus_test;

use std::sync::{Arc, Mutex, PoisonError};

/// Everything that travels on the bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Open the panel, optionally with a query to ask.
    Open { query: Option<String> },
    /// Open the panel and submit `query`.
    SubmitQuery { query: String },
}

type Handler = Arc<dyn Fn(&Signal) + Send + Sync>;

/// Handle returned by [`SignalBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

#[derive(Default)]
struct Inner {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Cloneable publish/subscribe channel for [`Signal`]s.
#[derive(Clone, Default)]
pub struct SignalBus {
    inner: Arc<Mutex<Inner>>,
}

impl std::fmt::Debug for SignalBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.inner.lock().unwrap_or_else(PoisonError::into_inner).handlers.len();
        f.debug_struct("SignalBus").field("subscribers", &count).finish()
    }
}

impl SignalBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl Fn(&Signal) + Send + Sync + 'static) -> Subscription {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.handlers.push((id, Arc::new(handler)));
        Subscription(id)
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.handlers.retain(|(id, _)| *id != subscription.0);
    }

    /// Deliver `signal` to every current subscriber in subscription order.
    pub fn publish(&self, signal: &Signal) {
        let handlers: Vec<Handler> = {
            let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.handlers.iter().map(|(_, h)| Arc::clone(h)).collect()
        };
        log::debug!("bus: {signal:?} -> {} subscriber(s)", handlers.len());
        for handler in handlers {
            handler(signal);
        }
    }
}
