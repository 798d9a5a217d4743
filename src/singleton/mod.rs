//! Singleton holders and the mechanisms that break or preserve them.
//!
//! Three holders share one mutable `number` field:
//!
//! - [`Settings`]: lazy holder behind a one-time-init cell, with a resolution
//!   hook so decoding snaps back to the canonical instance.
//! - [`PlainSettings`]: lazy holder behind a mutex guard, without a hook.
//!   Decoding yields a second instance.
//! - [`EnumSettings`]: a one-variant enum. Construction is closed by the type
//!   system and decoding always yields the same constant.
//!
//! [`DeclaredConstructors`] is the escape hatch that bypasses the accessors,
//! and [`write_object`] / [`read_object`] are the serialization boundary.
//!
//! ```rust
//! use gof_creational::Settings;
//!
//! let first = Settings::get_instance();
//! let second = Settings::get_instance();
//! assert!(std::ptr::eq(first, second));
//! ```

pub mod constructor;
pub mod enum_settings;
pub mod serial;
pub mod settings;

pub use constructor::{Constructor, DeclaredConstructors};
pub use enum_settings::EnumSettings;
pub use serial::{from_bytes, read_object, to_bytes, write_object, DecodeToken, ResolveHook, Resolved, Snapshot};
pub use settings::{PlainSettings, Settings};

use crate::sync::{const_mutex, lock, Mutex};

/// The single mutable field every holder carries.
#[derive(Debug)]
pub(crate) struct NumberSlot(Mutex<Option<i32>>);

impl NumberSlot {
    pub(crate) const fn new(value: Option<i32>) -> Self {
        Self(const_mutex(value))
    }

    pub(crate) fn get(&self) -> Option<i32> {
        *lock(&self.0)
    }

    pub(crate) fn set(&self, value: Option<i32>) {
        *lock(&self.0) = value;
    }
}
