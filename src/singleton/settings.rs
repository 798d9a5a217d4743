//! Lazily created settings holders.

use serde::{Deserialize, Serialize};

use super::constructor::{Constructor, DeclaredConstructors};
use super::serial::{DecodeToken, ResolveHook, Resolved, Snapshot};
use super::NumberSlot;
use crate::sync::{const_mutex, lock, Mutex, OnceCell};

static SETTINGS: OnceCell<Settings> = OnceCell::new();

static PLAIN_SETTINGS: Mutex<Option<&'static PlainSettings>> = const_mutex(None);

/// Wire form shared by both lazy holders.
///
/// Only the holders produce snapshots; the field is not writable from
/// outside the crate:
///
/// ```compile_fail
/// use gof_creational::singleton::settings::SettingsSnapshot;
///
/// let wire = SettingsSnapshot { number: Some(1) };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    number: Option<i32>,
}

/// Process-wide settings created on first access.
///
/// There is no public constructor. The only sanctioned path to an instance is
/// [`Settings::get_instance`], and a decoded snapshot resolves back to the
/// same instance through [`ResolveHook::read_resolve`].
///
/// # Examples
///
/// ```rust
/// use gof_creational::{from_bytes, to_bytes, Settings};
///
/// let settings = Settings::get_instance();
/// let bytes = to_bytes(settings).unwrap();
/// let decoded = from_bytes::<Settings>(&bytes).unwrap();
///
/// assert!(decoded.is_canonical());
/// assert!(std::ptr::eq(settings, &*decoded));
/// ```
#[derive(Debug)]
pub struct Settings {
    number: NumberSlot,
}

impl Settings {
    fn new() -> Self {
        Self { number: NumberSlot::new(None) }
    }

    /// Returns the shared instance, creating it on the first call.
    ///
    /// Concurrent first calls race on the one-time-init cell; exactly one
    /// initializer runs and every caller observes its result.
    pub fn get_instance() -> &'static Settings {
        SETTINGS.get_or_init(Settings::new)
    }

    pub fn number(&self) -> Option<i32> {
        self.number.get()
    }

    pub fn set_number(&self, number: impl Into<Option<i32>>) {
        self.number.set(number.into());
    }
}

impl Snapshot for Settings {
    type Wire = SettingsSnapshot;

    fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot { number: self.number() }
    }

    fn materialize(wire: SettingsSnapshot, _token: DecodeToken) -> Self {
        Self { number: NumberSlot::new(wire.number) }
    }
}

impl ResolveHook for Settings {
    /// Discards the decoded object in favour of the canonical instance.
    fn read_resolve(_fresh: Box<Self>) -> Resolved<Self> {
        Resolved::Canonical(Settings::get_instance())
    }
}

impl DeclaredConstructors for Settings {
    fn declared_constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::private(std::any::type_name::<Self>(), |_| {
            Ok(Box::new(Settings::new()))
        })]
    }
}

/// Settings holder without a resolution hook.
///
/// The accessor serializes first-time creation behind a mutex held for the
/// check-and-create sequence. Decoding a snapshot produces a new instance
/// that is not the one the accessor returns.
#[derive(Debug)]
pub struct PlainSettings {
    number: NumberSlot,
}

impl PlainSettings {
    fn new() -> Self {
        Self { number: NumberSlot::new(None) }
    }

    /// Returns the shared instance, creating it under the guard if needed.
    pub fn get_instance() -> &'static PlainSettings {
        let mut slot = lock(&PLAIN_SETTINGS);
        *slot.get_or_insert_with(|| &*Box::leak(Box::new(PlainSettings::new())))
    }

    pub fn number(&self) -> Option<i32> {
        self.number.get()
    }

    pub fn set_number(&self, number: impl Into<Option<i32>>) {
        self.number.set(number.into());
    }
}

impl Snapshot for PlainSettings {
    type Wire = SettingsSnapshot;

    fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot { number: self.number() }
    }

    fn materialize(wire: SettingsSnapshot, _token: DecodeToken) -> Self {
        Self { number: NumberSlot::new(wire.number) }
    }
}

impl ResolveHook for PlainSettings {}

impl DeclaredConstructors for PlainSettings {
    fn declared_constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::private(std::any::type_name::<Self>(), |_| {
            Ok(Box::new(PlainSettings::new()))
        })]
    }
}
