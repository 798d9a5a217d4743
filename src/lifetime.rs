//! Bean lifetime definitions.

/// Bean lifetimes controlling instance caching behavior
///
/// # Examples
///
/// ```rust
/// use gof_creational::BeanCollection;
/// use std::sync::Arc;
///
/// struct Greeting(String);
/// struct Ticket(u32);
///
/// let mut beans = BeanCollection::new();
/// beans.add_singleton_factory::<Greeting, _>(|_| Greeting("hello".to_string()));
/// beans.add_prototype_factory::<Ticket, _>(|_| Ticket(7));
///
/// let context = beans.build();
///
/// // Singleton: one instance per context
/// let a = context.get_bean::<Greeting>().unwrap();
/// let b = context.get_bean::<Greeting>().unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
///
/// // Prototype: new instance per lookup
/// let t1 = context.get_bean::<Ticket>().unwrap();
/// let t2 = context.get_bean::<Ticket>().unwrap();
/// assert!(!Arc::ptr_eq(&t1, &t2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Created on first lookup and cached for the lifetime of the context.
    Singleton,
    /// Created anew on every lookup, never cached.
    Prototype,
}
