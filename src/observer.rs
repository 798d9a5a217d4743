//! Observers for ship order events.
//!
//! The dispatch protocol reports its two side effects, preparation and the
//! customer notice, to an [`OrderObserver`]. [`LoggingObserver`] writes them
//! to stdout; [`Observers`] fans one event out to many observers.

use std::sync::Arc;

use crate::config::ConfigProvider;
use crate::ship::Notice;

/// Observer of the side effects emitted while a ship order runs.
///
/// Calls are made synchronously inside [`order_ship`](crate::order_ship).
/// Neither method is called when the order is rejected during validation.
///
/// # Examples
///
/// ```
/// use gof_creational::{order_ship, Notice, OrderObserver, WhiteShipFactory};
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Recorder {
///     events: Mutex<Vec<String>>,
/// }
///
/// impl OrderObserver for Recorder {
///     fn preparing(&self, name: &str) {
///         self.events.lock().unwrap().push(format!("preparing {}", name));
///     }
///
///     fn notified(&self, notice: &Notice) {
///         self.events.lock().unwrap().push(format!("notified {}", notice.to));
///     }
/// }
///
/// let recorder = Recorder::default();
/// order_ship(&WhiteShipFactory::new(), "Whiteship", "keesun@mail.com", &recorder).unwrap();
///
/// let events = recorder.events.lock().unwrap();
/// assert_eq!(*events, vec!["preparing Whiteship", "notified keesun@mail.com"]);
/// ```
pub trait OrderObserver: Send + Sync {
    /// Called after validation, before the factory builds the ship.
    fn preparing(&self, name: &str);

    /// Called with the notice the factory produced for the customer.
    fn notified(&self, notice: &Notice);
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl OrderObserver for NoopObserver {
    fn preparing(&self, _name: &str) {}

    fn notified(&self, _notice: &Notice) {}
}

/// Fan-out over registered observers.
///
/// Has minimal overhead when empty.
#[derive(Default, Clone)]
pub struct Observers {
    observers: Vec<Arc<dyn OrderObserver>>,
}

impl Observers {
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    pub fn add(&mut self, observer: Arc<dyn OrderObserver>) {
        self.observers.push(observer);
    }

    #[inline]
    pub fn has_observers(&self) -> bool {
        !self.observers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl OrderObserver for Observers {
    #[inline]
    fn preparing(&self, name: &str) {
        for observer in &self.observers {
            observer.preparing(name);
        }
    }

    #[inline]
    fn notified(&self, notice: &Notice) {
        for observer in &self.observers {
            observer.notified(notice);
        }
    }
}

/// Built-in observer that logs events to stdout.
///
/// # Examples
///
/// ```
/// use gof_creational::{LoggingObserver, Shipyard};
/// use std::sync::Arc;
///
/// let mut shipyard = Shipyard::new();
/// shipyard.add_observer(Arc::new(LoggingObserver::new()));
/// ```
#[derive(Debug, Clone)]
pub struct LoggingObserver {
    prefix: String,
    log_preparation: bool,
    log_notices: bool,
}

impl LoggingObserver {
    pub const DEFAULT_PREFIX: &'static str = "[shipyard]";

    /// Creates a logging observer with the default prefix.
    pub fn new() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }

    /// Creates a logging observer with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            log_preparation: true,
            log_notices: true,
        }
    }

    /// Reads `log_prefix`, `log_preparation` and `log_notices` from `config`.
    pub fn from_config(config: &ConfigProvider) -> Self {
        Self {
            prefix: config.get_string_or("log_prefix", Self::DEFAULT_PREFIX),
            log_preparation: config.get_bool_or("log_preparation", true),
            log_notices: config.get_bool_or("log_notices", true),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn logs_preparation(&self) -> bool {
        self.log_preparation
    }

    pub fn logs_notices(&self) -> bool {
        self.log_notices
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderObserver for LoggingObserver {
    fn preparing(&self, name: &str) {
        if self.log_preparation {
            println!("{} Preparing: {}", self.prefix, name);
        }
    }

    fn notified(&self, notice: &Notice) {
        if self.log_notices {
            println!("{} Notice to {}: {}", self.prefix, notice.to, notice.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Counting {
        preparing: AtomicUsize,
        notified: AtomicUsize,
    }

    impl OrderObserver for Counting {
        fn preparing(&self, _name: &str) {
            self.preparing.fetch_add(1, Ordering::SeqCst);
        }

        fn notified(&self, _notice: &Notice) {
            self.notified.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_observers_fan_out() {
        let a = Arc::new(Counting::default());
        let b = Arc::new(Counting::default());

        let mut observers = Observers::new();
        assert!(!observers.has_observers());
        observers.add(a.clone());
        observers.add(b.clone());
        assert_eq!(observers.len(), 2);

        observers.preparing("Whiteship");
        observers.notified(&Notice::new("keesun@mail.com", "Whiteship", "done"));

        for counter in [&a, &b] {
            assert_eq!(counter.preparing.load(Ordering::SeqCst), 1);
            assert_eq!(counter.notified.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn test_logging_observer_defaults() {
        let observer = LoggingObserver::default();
        assert_eq!(observer.prefix(), "[shipyard]");
        assert!(observer.logs_preparation());
        assert!(observer.logs_notices());
    }
}
