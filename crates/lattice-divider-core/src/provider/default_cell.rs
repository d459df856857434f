//! Process-wide lazily created default providers.

use std::sync::Arc;

use parking_lot::RwLock;

/// A lazily initialized, shared default instance.
///
/// The first caller builds the value; every later caller, from any thread,
/// gets the same `Arc`. The fast path only takes a read lock. Initialization
/// re-checks the slot under the write lock, so racing first uses still
/// construct exactly one instance.
pub struct DefaultCell<T> {
    slot: RwLock<Option<Arc<T>>>,
}

impl<T> DefaultCell<T> {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Get the shared instance, building it with `init` on first use.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> Arc<T> {
        if let Some(value) = self.get() {
            return value;
        }

        let mut slot = self.slot.write();
        if let Some(value) = slot.as_ref() {
            return Arc::clone(value);
        }
        let value = Arc::new(init());
        *slot = Some(Arc::clone(&value));
        value
    }

    /// Get the shared instance if it has been built.
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.read().as_ref().map(Arc::clone)
    }
}

impl<T> Default for DefaultCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_first_init_wins() {
        let cell = DefaultCell::new();
        assert!(cell.get().is_none());

        let first = cell.get_or_init(|| 1);
        let second = cell.get_or_init(|| 2);
        assert_eq!(*first, 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_concurrent_first_use_builds_once() {
        static CELL: DefaultCell<usize> = DefaultCell::new();
        static BUILDS: AtomicUsize = AtomicUsize::new(0);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    CELL.get_or_init(|| {
                        BUILDS.fetch_add(1, Ordering::SeqCst);
                        42
                    })
                })
            })
            .collect();

        let values: Vec<Arc<usize>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
        assert!(values.iter().all(|v| Arc::ptr_eq(v, &values[0])));
    }
}
