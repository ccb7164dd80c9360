//! Reactive state cells
//!
//! A [`State`] is an explicitly owned value cell. Writing a different value
//! notifies every subscriber, in registration order, with the new value.
//! Writing an equal value is a no-op.
//!
//! A subscriber may write the cell it observes. The write is stored at once
//! but delivered in a fresh round after the current one finishes, so every
//! subscriber's last delivered value is the value the cell holds.
//!
//! Cells are single-threaded: the UI event that writes them and the frame loop
//! that reads them run on the same thread. Cloning a `State` clones the handle,
//! not the value.

use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

new_key_type! {
    /// Handle returned by [`State::subscribe`]
    pub struct SubscriptionId;
}

type Subscriber<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    value: T,
    /// Number of changes applied since creation
    version: u64,
    subscribers: SlotMap<SubscriptionId, Subscriber<T>>,
    /// Set while a notification round is being delivered
    notifying: bool,
}

/// Shared, observable value cell
pub struct State<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T: Clone + PartialEq + 'static> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                subscribers: SlotMap::with_key(),
                notifying: false,
            })),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of changes applied since creation
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Store `value`; notifies subscribers and returns `true` only if it differs
    /// from the current value.
    ///
    /// Called from inside a subscriber, the value is stored immediately and
    /// delivered once the running round completes.
    pub fn set(&self, value: T) -> bool {
        let nested = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value;
            inner.version += 1;
            inner.notifying
        };
        if !nested {
            self.notify();
        }
        true
    }

    /// Mutate the value in place, notifying if the result differs.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }

    /// Register a callback run after every change.
    ///
    /// The callback is not invoked for the current value.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let subscriber: Subscriber<T> = Rc::new(RefCell::new(callback));
        self.inner.borrow_mut().subscribers.insert(subscriber)
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().subscribers.remove(id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self) {
        self.inner.borrow_mut().notifying = true;

        loop {
            // Snapshot the subscriber list and value so callbacks may read this
            // cell (or subscribe/unsubscribe) without a borrow conflict.
            let (value, version, subscribers): (T, u64, Vec<Subscriber<T>>) = {
                let inner = self.inner.borrow();
                (
                    inner.value.clone(),
                    inner.version,
                    inner.subscribers.values().cloned().collect(),
                )
            };

            tracing::trace!(version, subscribers = subscribers.len(), "state changed");

            for subscriber in subscribers {
                (&mut *subscriber.borrow_mut())(&value);
            }

            let mut inner = self.inner.borrow_mut();
            if inner.version == version {
                inner.notifying = false;
                break;
            }
        }
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("State")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}
