//! Serialization round-trips with an explicit post-decode resolution step.

use std::fmt;
use std::io::{Read, Write};
use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PatternResult;

/// Permission to rebuild a holder from its wire form.
///
/// Only [`read_object`] can create one, so decoding is the sole caller of
/// [`Snapshot::materialize`].
#[derive(Debug)]
pub struct DecodeToken(());

impl DecodeToken {
    pub(crate) fn new() -> Self {
        DecodeToken(())
    }
}

/// Conversion between a holder and its wire form.
///
/// `materialize` always builds a new value, the way a decoder does; whether
/// that value survives is decided afterwards by [`ResolveHook`]. It cannot
/// be called from outside the decoder:
///
/// ```compile_fail
/// use gof_creational::{DecodeToken, Settings, Snapshot};
///
/// let wire = Settings::get_instance().snapshot();
/// let rogue = Settings::materialize(wire, DecodeToken(()));
/// ```
pub trait Snapshot: Sized {
    type Wire: Serialize + DeserializeOwned;

    fn snapshot(&self) -> Self::Wire;

    fn materialize(wire: Self::Wire, token: DecodeToken) -> Self;
}

/// Post-decode substitution step.
///
/// The default keeps the freshly decoded value. Holders that must stay
/// singletons override it to return their canonical instance.
pub trait ResolveHook: Snapshot + 'static {
    fn read_resolve(fresh: Box<Self>) -> Resolved<Self> {
        Resolved::Fresh(fresh)
    }
}

/// Outcome of a decode.
pub enum Resolved<T: 'static> {
    /// The process-wide instance replaced the decoded value
    Canonical(&'static T),
    /// The decoded value itself
    Fresh(Box<T>),
}

impl<T: 'static> Resolved<T> {
    pub fn is_canonical(&self) -> bool {
        matches!(self, Resolved::Canonical(_))
    }

    /// Returns the boxed value if the decode kept it.
    pub fn into_fresh(self) -> Option<Box<T>> {
        match self {
            Resolved::Fresh(value) => Some(value),
            Resolved::Canonical(_) => None,
        }
    }
}

impl<T: 'static> Deref for Resolved<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Resolved::Canonical(value) => *value,
            Resolved::Fresh(value) => &**value,
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Resolved<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Canonical(value) => f.debug_tuple("Canonical").field(value).finish(),
            Resolved::Fresh(value) => f.debug_tuple("Fresh").field(value).finish(),
        }
    }
}

/// Encodes `value` onto `writer`.
pub fn write_object<T, W>(value: &T, writer: W) -> PatternResult<()>
where
    T: Snapshot,
    W: Write,
{
    serde_json::to_writer(writer, &value.snapshot())?;
    Ok(())
}

/// Decodes a value from `reader` and runs its resolution hook.
pub fn read_object<T, R>(reader: R) -> PatternResult<Resolved<T>>
where
    T: ResolveHook,
    R: Read,
{
    let wire: T::Wire = serde_json::from_reader(reader)?;
    let fresh = Box::new(T::materialize(wire, DecodeToken::new()));
    Ok(T::read_resolve(fresh))
}

pub fn to_bytes<T: Snapshot>(value: &T) -> PatternResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_object(value, &mut buf)?;
    Ok(buf)
}

pub fn from_bytes<T: ResolveHook>(bytes: &[u8]) -> PatternResult<Resolved<T>> {
    read_object(bytes)
}
