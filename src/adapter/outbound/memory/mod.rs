//! In-memory store implementations.
//!
//! Single-instance and intentionally non-durable: both stores reset on
//! process restart. A multi-instance deployment replaces these with an
//! externally synchronized store behind the same port traits.

use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;

use crate::domain::{TokenRecord, UserId};
use crate::port::outbound::store::{SelectionStore, SubscriberStore};

/// Subscriber registry backed by a `HashSet`.
#[derive(Default)]
pub struct InMemorySubscribers {
    inner: RwLock<HashSet<UserId>>,
}

impl InMemorySubscribers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubscriberStore for InMemorySubscribers {
    fn insert(&self, user: &UserId) -> bool {
        self.inner.write().insert(user.clone())
    }

    fn contains(&self, user: &UserId) -> bool {
        self.inner.read().contains(user)
    }

    fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    fn all(&self) -> Vec<UserId> {
        self.inner.read().iter().cloned().collect()
    }
}

/// Per-user token selection cache backed by a `HashMap`.
#[derive(Default)]
pub struct InMemorySelections {
    inner: RwLock<HashMap<UserId, Vec<TokenRecord>>>,
}

impl InMemorySelections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SelectionStore for InMemorySelections {
    fn replace(&self, user: &UserId, tokens: Vec<TokenRecord>) {
        self.inner.write().insert(user.clone(), tokens);
    }

    fn current(&self, user: &UserId) -> Option<Vec<TokenRecord>> {
        self.inner.read().get(user).cloned()
    }
}
