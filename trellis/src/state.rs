//! Shared component state.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// A value shared between a component and the handlers that mutate it.
///
/// Widgets handle keys through `&self`, so anything a key press can change
/// lives in a `State`. Clones are handles to the same value. Every write
/// bumps a revision counter the host can compare across renders.
///
/// ```
/// use trellis::State;
///
/// let open = State::new(false);
/// let seen = open.revision();
/// open.update(|v| *v = !*v);
/// assert!(open.get());
/// assert!(open.changed_since(seen));
/// ```
pub struct State<T> {
    shared: Arc<Shared<T>>,
}

struct Shared<T> {
    value: Mutex<T>,
    revision: AtomicU64,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                value: Mutex::new(value),
                revision: AtomicU64::new(0),
            }),
        }
    }

    // A handler that panicked mid-write leaves the last value in place.
    fn lock(&self) -> MutexGuard<'_, T> {
        self.shared
            .value
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn bump(&self) {
        self.shared.revision.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.lock().clone()
    }

    /// Borrow the value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.lock())
    }

    pub fn set(&self, value: T) {
        *self.lock() = value;
        self.bump();
    }

    /// Store `value` and hand back the previous one.
    pub fn replace(&self, value: T) -> T {
        let previous = std::mem::replace(&mut *self.lock(), value);
        self.bump();
        previous
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.lock());
        self.bump();
        result
    }

    /// Number of writes so far.
    pub fn revision(&self) -> u64 {
        self.shared.revision.load(Ordering::SeqCst)
    }

    pub fn changed_since(&self, revision: u64) -> bool {
        self.revision() != revision
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| {
            f.debug_struct("State")
                .field("value", value)
                .field("revision", &self.revision())
                .finish()
        })
    }
}
