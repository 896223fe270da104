//! Listener registries
//!
//! A `Listeners<T>` holds callbacks that are invoked with a shared value
//! whenever the owner broadcasts a change. Removal is idempotent.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned when registering a listener
    pub struct ListenerId;
}

/// Boxed listener callback
pub type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Registry of change listeners
pub struct Listeners<T> {
    entries: SlotMap<ListenerId, Listener<T>>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
        }
    }

    /// Register a listener
    pub fn add<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.entries.insert(Box::new(listener))
    }

    /// Remove a listener. Returns false if it was already removed.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Invoke every listener with `value`
    pub fn notify(&self, value: &T) {
        tracing::trace!("notifying {} listeners", self.entries.len());
        for (_, listener) in self.entries.iter() {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all listeners
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}
