//! Constructor escape hatch.
//!
//! Rust has no reflection, so each holder lists its hidden constructors
//! explicitly. Calling one deliberately bypasses the holder's accessor: a
//! successful call yields an instance the accessor will never return.

use std::fmt;

use crate::error::{PatternError, PatternResult};

type Ctor<T> = fn(&[&str]) -> PatternResult<Box<T>>;

/// A hidden constructor of `T`.
///
/// Constructors start inaccessible, mirroring a private constructor; call
/// [`Constructor::set_accessible`] before [`Constructor::new_instance`].
///
/// # Examples
///
/// ```rust
/// use gof_creational::{DeclaredConstructors, Settings};
///
/// let mut constructor = Settings::declared_constructors().remove(0);
/// assert!(constructor.new_instance(&[]).is_err());
///
/// constructor.set_accessible(true);
/// let rogue = constructor.new_instance(&[]).unwrap();
/// assert!(!std::ptr::eq(&*rogue, Settings::get_instance()));
/// ```
pub struct Constructor<T> {
    declaring_type: &'static str,
    accessible: bool,
    ctor: Ctor<T>,
}

impl<T> Constructor<T> {
    pub(crate) fn private(declaring_type: &'static str, ctor: Ctor<T>) -> Self {
        Self { declaring_type, accessible: false, ctor }
    }

    pub fn declaring_type(&self) -> &'static str {
        self.declaring_type
    }

    pub fn is_accessible(&self) -> bool {
        self.accessible
    }

    pub fn set_accessible(&mut self, flag: bool) {
        self.accessible = flag;
    }

    /// Invokes the constructor, bypassing the type's accessor.
    ///
    /// Fails with [`PatternError::IllegalAccess`] until
    /// [`set_accessible`](Constructor::set_accessible) has been called.
    pub fn new_instance(&self, args: &[&str]) -> PatternResult<Box<T>> {
        if !self.accessible {
            return Err(PatternError::IllegalAccess("constructor is not accessible"));
        }
        (self.ctor)(args)
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("declaring_type", &self.declaring_type)
            .field("accessible", &self.accessible)
            .finish()
    }
}

/// Types that expose their hidden constructors.
pub trait DeclaredConstructors: Sized {
    fn declared_constructors() -> Vec<Constructor<Self>>;
}
