//! Live broadcast bus
//!
//! Announces a freshly saved [`TokenSet`] to every consumer mounted in the
//! process so it can re-apply the theme without a reload. Delivery is
//! synchronous, in registration order, exactly once per listener registered
//! at publish time. Nothing is queued: a listener registered after a publish
//! never sees that event.

use crate::applier;
use crate::style::StyleTarget;
use crate::tokens::TokenSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

/// Name of the token update event
pub const DESIGN_TOKENS_UPDATED: &str = "design-tokens-updated";

/// Global bus instance
static TOKEN_BUS: OnceLock<TokenBus> = OnceLock::new();

type Listener = Arc<dyn Fn(&TokenSet) + Send + Sync>;

/// Handle returned by [`TokenBus::subscribe`], used to unsubscribe
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct SubscriptionId(u64);

/// Typed publish/subscribe channel for token updates
pub struct TokenBus {
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl Default for TokenBus {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenBus {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Get the process-wide bus
    pub fn global() -> &'static TokenBus {
        TOKEN_BUS.get_or_init(TokenBus::new)
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Listener)>> {
        // Listeners are only pushed or removed under the lock, so the list is
        // consistent even if a previous holder panicked.
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener for [`DESIGN_TOKENS_UPDATED`]
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&TokenSet) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners().push((id, Arc::new(handler)));
        tracing::trace!(?id, "token bus subscribe");
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        before != listeners.len()
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners().len()
    }

    /// Deliver `tokens` to every listener registered right now.
    ///
    /// Returns the number of listeners called.
    pub fn publish(&self, tokens: &TokenSet) -> usize {
        // Snapshot so handlers may (un)subscribe without deadlocking.
        let snapshot: Vec<Listener> = self
            .listeners()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::debug!(
            event = DESIGN_TOKENS_UPDATED,
            listeners = snapshot.len(),
            "publishing design tokens"
        );

        for listener in &snapshot {
            listener(tokens);
        }
        snapshot.len()
    }
}

/// Keep `target` in sync with every token set published on `bus`.
pub fn bind_live_theme(bus: &TokenBus, target: Arc<dyn StyleTarget>) -> SubscriptionId {
    bus.subscribe(move |tokens| {
        if let Err(e) = applier::apply(tokens, target.as_ref()) {
            tracing::warn!("failed to apply broadcast design tokens: {e}");
        }
    })
}
