//! Mutex helpers.
//!
//! A poisoned lock only means another thread panicked mid-write. The data
//! guarded here (a log sink, the last printed timestamp) is safe to keep
//! using, so callers recover instead of propagating the poison.

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering the guard if it was poisoned.
///
/// ```rust
/// use std::sync::Mutex;
/// use chatmark::sync::lock_recover;
///
/// let mutex = Mutex::new(42);
/// assert_eq!(*lock_recover(&mutex), 42);
/// ```
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // No logging here: the logger itself locks through this function.
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
