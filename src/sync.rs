//! Feature-selected synchronization primitives.
//!
//! `parking-lot` swaps the std mutex for `parking_lot::Mutex`, `once-cell`
//! swaps `std::sync::OnceLock` for `once_cell::sync::OnceCell`. Both pairs
//! expose the same surface to the rest of the crate.

#[cfg(feature = "once-cell")]
pub(crate) type OnceCell<T> = once_cell::sync::OnceCell<T>;
#[cfg(not(feature = "once-cell"))]
pub(crate) type OnceCell<T> = std::sync::OnceLock<T>;

#[cfg(feature = "parking-lot")]
pub(crate) type Mutex<T> = parking_lot::Mutex<T>;
#[cfg(feature = "parking-lot")]
pub(crate) type MutexGuard<'a, T> = parking_lot::MutexGuard<'a, T>;

#[cfg(not(feature = "parking-lot"))]
pub(crate) type Mutex<T> = std::sync::Mutex<T>;
#[cfg(not(feature = "parking-lot"))]
pub(crate) type MutexGuard<'a, T> = std::sync::MutexGuard<'a, T>;

/// Creates a mutex usable in a `static` initializer.
#[cfg(feature = "parking-lot")]
pub(crate) const fn const_mutex<T>(value: T) -> Mutex<T> {
    parking_lot::const_mutex(value)
}

/// Creates a mutex usable in a `static` initializer.
#[cfg(not(feature = "parking-lot"))]
pub(crate) const fn const_mutex<T>(value: T) -> Mutex<T> {
    std::sync::Mutex::new(value)
}

/// Locks the mutex. A poisoned std mutex is recovered by taking the inner
/// guard; every critical section in the crate is a single assignment.
#[inline]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    #[cfg(feature = "parking-lot")]
    {
        mutex.lock()
    }

    #[cfg(not(feature = "parking-lot"))]
    {
        mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
