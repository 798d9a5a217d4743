//! Enumerated-constant singleton.

use serde::{Deserialize, Serialize};

use super::constructor::{Constructor, DeclaredConstructors};
use super::serial::{DecodeToken, ResolveHook, Snapshot};
use super::NumberSlot;
use crate::error::PatternError;

static INSTANCE_NUMBER: NumberSlot = NumberSlot::new(None);

/// Settings expressed as a closed enumeration with exactly one value.
///
/// No constructor path exists outside the variant itself, and a decoded
/// value is always `EnumSettings::Instance`, so no resolution hook is needed.
///
/// ```rust
/// use gof_creational::{from_bytes, to_bytes, EnumSettings};
///
/// let bytes = to_bytes(&EnumSettings::Instance).unwrap();
/// let decoded = from_bytes::<EnumSettings>(&bytes).unwrap();
/// assert_eq!(*decoded, EnumSettings::Instance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnumSettings {
    #[serde(rename = "INSTANCE")]
    Instance,
}

impl EnumSettings {
    pub fn get_instance() -> EnumSettings {
        EnumSettings::Instance
    }

    pub fn number(self) -> Option<i32> {
        match self {
            EnumSettings::Instance => INSTANCE_NUMBER.get(),
        }
    }

    pub fn set_number(self, number: impl Into<Option<i32>>) {
        match self {
            EnumSettings::Instance => INSTANCE_NUMBER.set(number.into()),
        }
    }
}

impl Snapshot for EnumSettings {
    type Wire = EnumSettings;

    fn snapshot(&self) -> EnumSettings {
        *self
    }

    fn materialize(wire: EnumSettings, _token: DecodeToken) -> Self {
        wire
    }
}

impl ResolveHook for EnumSettings {}

impl DeclaredConstructors for EnumSettings {
    /// The implicit `(name, ordinal)` constructor exists but always refuses.
    fn declared_constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::private(std::any::type_name::<Self>(), |_| {
            Err(PatternError::IllegalConstruction(
                "Cannot reflectively create enum objects",
            ))
        })]
    }
}
