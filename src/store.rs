//! Response store
//!
//! Holds the current [`ResponseState`] as an immutable snapshot and tells
//! subscribers whenever it is replaced. The store is owned by the UI loop and
//! passed by reference to whatever needs to read it.
//!
//! Overlapping dispatches are resolved by id: an outcome older than the one
//! already shown is dropped instead of overwriting it.

use crate::types::{DispatchId, ResponseState};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

pub type SubscriptionId = usize;

type Subscriber = Box<dyn FnMut(&Arc<ResponseState>) + Send>;

pub struct ResponseStore {
    current: Arc<ResponseState>,
    /// Id handed to the most recent dispatch
    last_issued: DispatchId,
    /// Id of the outcome currently shown (0 = none yet)
    last_applied: DispatchId,
    in_flight: usize,
    subscribers: BTreeMap<SubscriptionId, Subscriber>,
    next_subscription: SubscriptionId,
}

impl fmt::Debug for ResponseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseStore")
            .field("current", &self.current)
            .field("last_issued", &self.last_issued)
            .field("last_applied", &self.last_applied)
            .field("in_flight", &self.in_flight)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for ResponseStore {
    fn default() -> Self {
        Self::new(ResponseState::default())
    }
}

impl ResponseStore {
    pub fn new(initial: ResponseState) -> Self {
        Self {
            current: Arc::new(initial),
            last_issued: 0,
            last_applied: 0,
            in_flight: 0,
            subscribers: BTreeMap::new(),
            next_subscription: 0,
        }
    }

    /// Current response, cheap to clone and never mutated in place
    pub fn snapshot(&self) -> Arc<ResponseState> {
        Arc::clone(&self.current)
    }

    /// Allocate the id for a new dispatch
    pub fn begin_dispatch(&mut self) -> DispatchId {
        self.last_issued += 1;
        self.in_flight += 1;
        self.last_issued
    }

    /// Apply a finished dispatch. Returns false when the outcome was stale.
    pub fn publish(&mut self, id: DispatchId, state: ResponseState) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        if id < self.last_applied {
            tracing::debug!(
                id,
                last_applied = self.last_applied,
                "dropping stale dispatch result"
            );
            return false;
        }

        self.last_applied = id;
        self.replace(state);
        true
    }

    /// Replace the response outside of any dispatch
    pub fn set(&mut self, state: ResponseState) {
        self.replace(state);
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Arc<ResponseState>) + Send + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.insert(id, Box::new(callback));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    pub fn is_dispatching(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn replace(&mut self, state: ResponseState) {
        self.current = Arc::new(state);
        for subscriber in self.subscribers.values_mut() {
            subscriber(&self.current);
        }
    }
}
