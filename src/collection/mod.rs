//! Bean collection for the container.
//!
//! [`BeanCollection`] records bean registrations; [`BeanCollection::build`]
//! turns them into an [`ApplicationContext`] that hands the beans out.

use std::any::Any;
use std::sync::Arc;

use crate::error::PatternResult;
use crate::factory_bean::FactoryBean;
use crate::key::Key;
use crate::lifetime::Lifetime;
use crate::provider::ApplicationContext;
use crate::registration::{AnyArc, Registration, Registry};

/// Registrations awaiting [`build`](BeanCollection::build).
///
/// Registering a second bean under the same key replaces the first.
///
/// # Examples
///
/// ```rust
/// use gof_creational::BeanCollection;
/// use std::sync::Arc;
///
/// let mut beans = BeanCollection::new();
/// beans.add_named_singleton_factory::<String, _>("hello", |_| "hello".to_string());
///
/// let context = beans.build();
/// let hello1 = context.get_named_bean::<String>("hello").unwrap();
/// let hello2 = context.get_named_bean::<String>("hello").unwrap();
/// assert!(Arc::ptr_eq(&hello1, &hello2));
/// ```
pub struct BeanCollection {
    registry: Registry,
}

impl BeanCollection {
    pub fn new() -> Self {
        Self { registry: Registry::new() }
    }

    // ----- Ready-made instances -----

    /// Registers an existing value as a singleton bean.
    pub fn add_singleton<T: 'static + Send + Sync>(&mut self, value: T) -> &mut Self {
        self.add_instance(Key::of::<T>(), value)
    }

    /// Registers an existing value as a named singleton bean.
    pub fn add_named_singleton<T: 'static + Send + Sync>(&mut self, name: &str, value: T) -> &mut Self {
        self.add_instance(Key::named::<T>(name), value)
    }

    fn add_instance<T: 'static + Send + Sync>(&mut self, key: Key, value: T) -> &mut Self {
        let arc: AnyArc = Arc::new(value);
        let ctor = move |_: &ApplicationContext| -> PatternResult<AnyArc> { Ok(arc.clone()) };
        self.registry.insert(key, Registration::new(Lifetime::Singleton, Arc::new(ctor)));
        self
    }

    // ----- Factories -----

    /// Registers a factory whose result is created on first lookup and cached.
    ///
    /// The factory receives the context so it can look up other beans.
    pub fn add_singleton_factory<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: 'static + Send + Sync,
        F: Fn(&ApplicationContext) -> T + Send + Sync + 'static,
    {
        self.add_factory(Key::of::<T>(), Lifetime::Singleton, factory)
    }

    pub fn add_named_singleton_factory<T, F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        T: 'static + Send + Sync,
        F: Fn(&ApplicationContext) -> T + Send + Sync + 'static,
    {
        self.add_factory(Key::named::<T>(name), Lifetime::Singleton, factory)
    }

    /// Registers a factory that runs on every lookup.
    pub fn add_prototype_factory<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: 'static + Send + Sync,
        F: Fn(&ApplicationContext) -> T + Send + Sync + 'static,
    {
        self.add_factory(Key::of::<T>(), Lifetime::Prototype, factory)
    }

    pub fn add_named_prototype_factory<T, F>(&mut self, name: &str, factory: F) -> &mut Self
    where
        T: 'static + Send + Sync,
        F: Fn(&ApplicationContext) -> T + Send + Sync + 'static,
    {
        self.add_factory(Key::named::<T>(name), Lifetime::Prototype, factory)
    }

    fn add_factory<T, F>(&mut self, key: Key, lifetime: Lifetime, factory: F) -> &mut Self
    where
        T: 'static + Send + Sync,
        F: Fn(&ApplicationContext) -> T + Send + Sync + 'static,
    {
        let ctor = move |context: &ApplicationContext| -> PatternResult<AnyArc> {
            Ok(Arc::new(factory(context)))
        };
        self.registry.insert(key, Registration::new(lifetime, Arc::new(ctor)));
        self
    }

    // ----- Factory beans -----

    /// Registers the object produced by `bean` under the object's type.
    ///
    /// The lifetime follows [`FactoryBean::is_singleton`].
    pub fn add_factory_bean<B: FactoryBean>(&mut self, bean: B) -> &mut Self {
        self.add_object_of(Key::of::<B::Object>(), bean)
    }

    pub fn add_named_factory_bean<B: FactoryBean>(&mut self, name: &str, bean: B) -> &mut Self {
        self.add_object_of(Key::named::<B::Object>(name), bean)
    }

    fn add_object_of<B: FactoryBean>(&mut self, key: Key, bean: B) -> &mut Self {
        let lifetime = if bean.is_singleton() { Lifetime::Singleton } else { Lifetime::Prototype };
        let ctor = move |_: &ApplicationContext| -> PatternResult<AnyArc> {
            let object = bean.get_object()?;
            Ok(Arc::new(object) as Arc<dyn Any + Send + Sync>)
        };
        self.registry.insert(key, Registration::new(lifetime, Arc::new(ctor)));
        self
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Freezes the registrations into a context.
    pub fn build(self) -> ApplicationContext {
        ApplicationContext::new(self.registry)
    }
}

impl Default for BeanCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_key_replaces() {
        let mut beans = BeanCollection::new();
        beans.add_singleton(1u32).add_singleton(2u32);
        assert_eq!(beans.len(), 1);

        let context = beans.build();
        assert_eq!(*context.get_bean::<u32>().unwrap(), 2);
    }

    #[test]
    fn test_named_and_unnamed_are_distinct() {
        let mut beans = BeanCollection::new();
        beans.add_singleton(1u32).add_named_singleton("port", 8080u32);
        assert_eq!(beans.len(), 2);
    }
}
