//! Multi-subscriber notifications.
//!
//! Subscribers are either owned by the [`Event`] (`subscribe`) or held weakly
//! (`subscribe_weak`). A weak subscriber lives only as long as the `Rc` its
//! owner keeps; once that is dropped the subscriber is skipped and pruned on
//! the next [`Event::emit`].

use std::rc::{Rc, Weak};

/// Handle returned by `subscribe*`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Listener<T> = dyn Fn(&T);

enum Subscriber<T> {
    Owned(Box<Listener<T>>),
    Weak(Weak<Listener<T>>),
}

pub struct Event<T> {
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Event<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl Fn(&T) + 'static) -> SubscriptionId {
        self.push(Subscriber::Owned(Box::new(listener)))
    }

    pub fn subscribe_weak(&mut self, listener: &Rc<Listener<T>>) -> SubscriptionId {
        self.push(Subscriber::Weak(Rc::downgrade(listener)))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Number of registered subscribers, dead weak ones included until the next emit.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn emit(&mut self, value: &T) {
        let mut purge = false;
        for (_, subscriber) in &self.subscribers {
            match subscriber {
                Subscriber::Owned(listener) => listener(value),
                Subscriber::Weak(weak) => match weak.upgrade() {
                    Some(listener) => listener(value),
                    None => purge = true,
                },
            }
        }

        if purge {
            self.subscribers.retain(|(_, s)| match s {
                Subscriber::Owned(_) => true,
                Subscriber::Weak(weak) => weak.strong_count() > 0,
            });
        }
    }

    fn push(&mut self, subscriber: Subscriber<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }
}
