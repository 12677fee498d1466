//! An insertion-ordered set of non-owning observer references.

use std::sync::{Arc, Weak};

/// An insertion-ordered set of observers, held by weak reference.
///
/// The list tracks membership without taking ownership, so callers must
/// remove an observer before dropping it. Membership is reference identity
/// (the data pointer, not the vtable), so the same object cannot be
/// registered twice through differently-typed handles.
pub struct ObserverList<T: ?Sized> {
    observers: Vec<Weak<T>>,
}

impl<T: ?Sized> ObserverList<T> {
    /// Constructor
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    /// Adds an observer at the end of the iteration order.
    ///
    /// # Panics
    /// Panics if the observer is already registered.
    pub fn add_observer(&mut self, observer: &Arc<T>) {
        assert!(!self.contains(observer), "observer is already registered");
        self.observers.push(Arc::downgrade(observer));
    }

    /// Removes an observer. Removing an observer that was never added is a
    /// no-op.
    pub fn remove_observer(&mut self, observer: &Arc<T>) {
        let target = Arc::as_ptr(observer) as *const ();
        self.observers.retain(|o| Weak::as_ptr(o) as *const () != target);
    }

    /// Returns true if the observer is currently registered.
    pub fn contains(&self, observer: &Arc<T>) -> bool {
        let target = Arc::as_ptr(observer) as *const ();
        self.observers.iter().any(|o| Weak::as_ptr(o) as *const () == target)
    }

    /// Invokes `f` on every registered observer, in registration order.
    /// Entries whose referent has already been dropped are skipped.
    pub fn for_each(&self, mut f: impl FnMut(Arc<T>)) {
        for observer in &self.observers {
            if let Some(observer) = observer.upgrade() {
                f(observer);
            }
        }
    }
}

impl<T: ?Sized> Default for ObserverList<T> {
    fn default() -> Self {
        Self::new()
    }
}
