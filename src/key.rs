//! Bean key types for the container.

use std::any::TypeId;

/// Key for bean storage and lookup.
///
/// Beans are identified by their concrete type and, optionally, by a name.
///
/// # Examples
///
/// ```rust
/// use gof_creational::Key;
///
/// let unnamed = Key::of::<String>();
/// assert_eq!(unnamed.display_name(), "alloc::string::String");
/// assert_eq!(unnamed.bean_name(), None);
///
/// let named = Key::named::<String>("hello");
/// assert_eq!(named.bean_name(), Some("hello"));
/// assert!(named.is_type::<String>());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Concrete type key with TypeId and name for diagnostics
    Type(TypeId, &'static str),
    /// Named concrete type key with TypeId, type name and bean name
    Named(TypeId, &'static str, String),
}

impl Key {
    pub fn of<T: 'static>() -> Self {
        Key::Type(TypeId::of::<T>(), std::any::type_name::<T>())
    }

    pub fn named<T: 'static>(name: impl Into<String>) -> Self {
        Key::Named(TypeId::of::<T>(), std::any::type_name::<T>(), name.into())
    }

    /// The `std::any::type_name` of the bean type.
    pub fn display_name(&self) -> &'static str {
        match self {
            Key::Type(_, type_name) => type_name,
            Key::Named(_, type_name, _) => type_name,
        }
    }

    pub fn bean_name(&self) -> Option<&str> {
        match self {
            Key::Type(..) => None,
            Key::Named(_, _, name) => Some(name),
        }
    }

    pub fn bean_type(&self) -> TypeId {
        match self {
            Key::Type(id, _) => *id,
            Key::Named(id, _, _) => *id,
        }
    }

    pub fn is_type<T: 'static>(&self) -> bool {
        self.bean_type() == TypeId::of::<T>()
    }
}
