//! Mutable state ports: subscriber registry and token selection cache.
//!
//! Handlers take these as explicit dependencies instead of closing over
//! globals, so tests can inject fakes and a multi-instance deployment can
//! swap in an externally synchronized store without router changes.

use crate::domain::{TokenRecord, UserId};

/// Set of user identifiers granted access to gated features.
///
/// Membership is idempotent; the registry is created empty at process
/// start and is intentionally not persisted.
pub trait SubscriberStore: Send + Sync {
    /// Insert a subscriber. Returns `true` if the user was newly added.
    fn insert(&self, user: &UserId) -> bool;

    fn contains(&self, user: &UserId) -> bool;

    fn is_empty(&self) -> bool;

    /// Snapshot of all subscribers, for broadcast iteration.
    fn all(&self) -> Vec<UserId>;
}

/// Per-user cache of the most recent discovery result.
///
/// At most one list per user, overwritten on each new discovery call.
pub trait SelectionStore: Send + Sync {
    fn replace(&self, user: &UserId, tokens: Vec<TokenRecord>);

    fn current(&self, user: &UserId) -> Option<Vec<TokenRecord>>;
}
