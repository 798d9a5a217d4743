//! Application context resolving beans from a built collection.

use std::any::TypeId;
use std::sync::Arc;

use crate::error::{PatternError, PatternResult};
use crate::key::Key;
use crate::registration::{AnyArc, Registration, Registry};

/// Read-only bean container.
///
/// Cheap to clone; clones share the same registrations and singleton caches.
///
/// # Examples
///
/// ```
/// use gof_creational::{BeanCollection, Ship, ShipFactoryBean};
///
/// let mut beans = BeanCollection::new();
/// beans.add_factory_bean(ShipFactoryBean);
///
/// let context = beans.build();
/// let whiteship = context.get_bean::<Ship>().unwrap();
/// assert_eq!(whiteship.name(), "whiteship");
/// ```
#[derive(Clone)]
pub struct ApplicationContext {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    registry: Registry,
}

impl ApplicationContext {
    pub(crate) fn new(registry: Registry) -> Self {
        Self { inner: Arc::new(ContextInner { registry }) }
    }

    /// Looks a bean up by type.
    ///
    /// An unnamed registration wins; otherwise the first named bean of the
    /// type, in registration order, is returned.
    pub fn get_bean<T: 'static + Send + Sync>(&self) -> PatternResult<Arc<T>> {
        let key = Key::of::<T>();
        let registration = self
            .inner
            .registry
            .get(&key)
            .or_else(|| self.inner.registry.first_of_type(TypeId::of::<T>()))
            .ok_or_else(|| PatternError::BeanNotFound(key.display_name().to_string()))?;
        self.materialize(registration)
    }

    /// Looks a bean up by name and type.
    pub fn get_named_bean<T: 'static + Send + Sync>(&self, name: &str) -> PatternResult<Arc<T>> {
        let registration = self
            .inner
            .registry
            .get(&Key::named::<T>(name))
            .ok_or_else(|| PatternError::BeanNotFound(name.to_string()))?;
        self.materialize(registration)
    }

    pub fn contains_bean<T: 'static>(&self) -> bool {
        self.inner.registry.first_of_type(TypeId::of::<T>()).is_some()
    }

    pub fn contains_named_bean<T: 'static>(&self, name: &str) -> bool {
        self.inner.registry.get(&Key::named::<T>(name)).is_some()
    }

    /// Names of all named beans, in registration order.
    pub fn bean_names(&self) -> Vec<String> {
        self.inner
            .registry
            .keys()
            .filter_map(|key| key.bean_name().map(str::to_string))
            .collect()
    }

    fn materialize<T: 'static + Send + Sync>(&self, registration: &Registration) -> PatternResult<Arc<T>> {
        let any: AnyArc = registration.instantiate(self)?;
        any.downcast::<T>()
            .map_err(|_| PatternError::BeanTypeMismatch(std::any::type_name::<T>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::BeanCollection;

    #[test]
    fn test_missing_bean() {
        let context = BeanCollection::new().build();
        let err = context.get_bean::<String>().unwrap_err();
        assert_eq!(err, PatternError::BeanNotFound("alloc::string::String".to_string()));

        let err = context.get_named_bean::<String>("hello").unwrap_err();
        assert_eq!(err, PatternError::BeanNotFound("hello".to_string()));
    }

    #[test]
    fn test_type_lookup_falls_back_to_named() {
        let mut beans = BeanCollection::new();
        beans.add_named_singleton("first", 1u8).add_named_singleton("second", 2u8);
        let context = beans.build();

        assert_eq!(*context.get_bean::<u8>().unwrap(), 1);
        assert!(context.contains_bean::<u8>());
        assert!(!context.contains_named_bean::<u8>("third"));
        assert_eq!(context.bean_names(), vec!["first", "second"]);
    }

    #[test]
    fn test_factories_see_other_beans() {
        struct Port(u16);
        struct Address(String);

        let mut beans = BeanCollection::new();
        beans.add_singleton(Port(8080));
        beans.add_prototype_factory::<Address, _>(|context| {
            let port = context.get_bean::<Port>().map(|p| p.0).unwrap_or_default();
            Address(format!("localhost:{}", port))
        });

        let context = beans.build();
        assert_eq!(context.get_bean::<Address>().unwrap().0, "localhost:8080");
    }
}
