//! Listener registry
//!
//! An ordered list of callbacks interested in values of one type. Listeners
//! are notified synchronously, in registration order, on the calling thread.
//!
//! Owners that hold the registry behind a `RefCell` should call
//! [`ListenerRegistry::snapshot`] and release the borrow before invoking the
//! listeners, so a listener may register, unregister or trigger another
//! publication without a double borrow.

use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::rc::Rc;

new_key_type! {
    /// Handle returned by [`ListenerRegistry::register`]
    pub struct ListenerId;
}

/// Listener callback type
pub type Listener<T> = Rc<dyn Fn(&T)>;

/// Ordered set of listeners for values of type `T`
pub struct ListenerRegistry<T> {
    listeners: SlotMap<ListenerId, Listener<T>>,
    /// Registration order; slotmap iteration order reuses freed slots
    order: Vec<ListenerId>,
}

impl<T> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Register a listener, returning its handle
    pub fn register<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&T) + 'static,
    {
        let id = self.listeners.insert(Rc::new(listener));
        self.order.push(id);
        id
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        if self.listeners.remove(id).is_none() {
            return false;
        }
        self.order.retain(|existing| *existing != id);
        true
    }

    /// Whether `id` is still registered
    pub fn contains(&self, id: ListenerId) -> bool {
        self.listeners.contains_key(id)
    }

    /// Listeners in registration order, detached from the registry
    pub fn snapshot(&self) -> Vec<Listener<T>> {
        self.order
            .iter()
            .filter_map(|id| self.listeners.get(*id).cloned())
            .collect()
    }

    /// Notify every listener with `value`
    pub fn notify(&self, value: &T) {
        for listener in self.snapshot() {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drop every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
        self.order.clear();
    }
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ListenerRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("len", &self.order.len())
            .finish()
    }
}
