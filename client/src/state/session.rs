//! Observable session snapshot published by the identity service.
//!
//! DESIGN
//! ======
//! The identity provider owns the session; this feed is the single place the
//! UI learns about it. Services `publish` snapshots, components `subscribe`
//! and hold the returned [`Subscription`] for as long as they want updates.
//! Everything runs on the UI thread, so the feed is `Rc<RefCell<_>>`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::net::types::{SessionId, User};

/// Point-in-time view of the provider's session state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session_id: Option<SessionId>,
    pub user: Option<User>,
}

impl SessionSnapshot {
    pub fn signed_in(session_id: Option<SessionId>, user: User) -> Self {
        Self { session_id, user: Some(user) }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    /// A session counts as authenticated once the provider reports a user.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

type Listener = Rc<dyn Fn(&SessionSnapshot)>;

#[derive(Default)]
struct FeedInner {
    current: SessionSnapshot,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Shared handle to the latest [`SessionSnapshot`]. Clones share state.
#[derive(Clone, Default)]
pub struct SessionFeed {
    inner: Rc<RefCell<FeedInner>>,
}

impl SessionFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.borrow().current.clone()
    }

    /// Replace the current snapshot and notify subscribers.
    ///
    /// Publishing an identical snapshot is a no-op. Listeners may publish or
    /// subscribe re-entrantly; they see the feed after this update.
    pub fn publish(&self, snapshot: SessionSnapshot) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.current == snapshot {
                return;
            }
            inner.current = snapshot.clone();
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener(&snapshot);
        }
    }

    /// Register `listener` and immediately deliver the current snapshot.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&SessionSnapshot) + 'static,
    {
        let listener: Listener = Rc::new(listener);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::clone(&listener)));
            (id, inner.current.clone())
        };
        listener(&current);
        Subscription { id, feed: Rc::downgrade(&self.inner) }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Guard returned by [`SessionFeed::subscribe`]; unsubscribes on drop.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    id: u64,
    feed: Weak<RefCell<FeedInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.feed.upgrade() {
            inner.borrow_mut().listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
