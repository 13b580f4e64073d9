//! Scoped listener registrations.
//!
//! A [`Subscription`] owns the release of one registration and runs it exactly
//! once: on [`Subscription::unsubscribe`] or, failing that, on drop. Holding
//! the guard in the owning scope is what keeps a listener from outliving the
//! consumer it writes to.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Guard for a live listener registration.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A guard with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Release the registration now.
    pub fn unsubscribe(mut self) {
        self.release_once();
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_once();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}

type Listener<T> = Rc<dyn Fn(&T)>;

struct ListenerTable<T> {
    next_id: u64,
    entries: Vec<(u64, Listener<T>)>,
}

/// Single-threaded listener registry used for change notifications.
pub struct Listeners<T> {
    table: Rc<RefCell<ListenerTable<T>>>,
}

impl<T> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self { table: Rc::clone(&self.table) }
    }
}

impl<T: 'static> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Listeners<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { table: Rc::new(RefCell::new(ListenerTable { next_id: 0, entries: Vec::new() })) }
    }

    /// Register `listener`; it stays registered while the returned guard lives.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut table = self.table.borrow_mut();
            let id = table.next_id;
            table.next_id += 1;
            table.entries.push((id, Rc::new(listener)));
            id
        };
        let weak: Weak<RefCell<ListenerTable<T>>> = Rc::downgrade(&self.table);
        Subscription::new(move || {
            if let Some(table) = weak.upgrade() {
                table.borrow_mut().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Deliver `value` to every listener registered at the time of the call.
    ///
    /// The table is not borrowed while listeners run, so a listener may
    /// subscribe or unsubscribe re-entrantly.
    pub fn emit(&self, value: &T) {
        let snapshot: Vec<Listener<T>> = self
            .table
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(value);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
