//! Bean registration types.

use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::error::PatternResult;
use crate::key::Key;
use crate::lifetime::Lifetime;
use crate::provider::ApplicationContext;
use crate::sync::{lock, Mutex, OnceCell};

// Type-erased Arc for storage
pub(crate) type AnyArc = Arc<dyn Any + Send + Sync>;

pub(crate) type Ctor = Arc<dyn Fn(&ApplicationContext) -> PatternResult<AnyArc> + Send + Sync>;

/// Singleton cache plus the guard serializing its first construction
struct SingleSlot {
    cell: OnceCell<AnyArc>,
    init: Mutex<()>,
}

/// Bean registration with lifetime and constructor
pub(crate) struct Registration {
    ctor: Ctor,
    single_runtime: Option<SingleSlot>,
}

impl Registration {
    pub(crate) fn new(lifetime: Lifetime, ctor: Ctor) -> Self {
        let single_runtime = match lifetime {
            Lifetime::Singleton => Some(SingleSlot { cell: OnceCell::new(), init: Mutex::new(()) }),
            Lifetime::Prototype => None,
        };
        Self { ctor, single_runtime }
    }

    /// Produces the instance for this registration.
    ///
    /// A singleton's constructor runs at most once per successful creation:
    /// racing first lookups wait on the guard and then read the cached value.
    /// A failed constructor leaves the cell empty so the next lookup retries.
    pub(crate) fn instantiate(&self, context: &ApplicationContext) -> PatternResult<AnyArc> {
        match &self.single_runtime {
            Some(slot) => {
                if let Some(value) = slot.cell.get() {
                    return Ok(value.clone());
                }
                let _guard = lock(&slot.init);
                if let Some(value) = slot.cell.get() {
                    return Ok(value.clone());
                }
                let created = (self.ctor)(context)?;
                Ok(slot.cell.get_or_init(|| created).clone())
            }
            None => (self.ctor)(context),
        }
    }
}

/// Bean registry holding all registrations in registration order
pub(crate) struct Registry {
    entries: Vec<(Key, Registration)>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Inserts a registration, replacing any existing one for the key.
    pub(crate) fn insert(&mut self, key: Key, registration: Registration) {
        if let Some(pos) = self.entries.iter().position(|(k, _)| k == &key) {
            self.entries[pos] = (key, registration);
        } else {
            self.entries.push((key, registration));
        }
    }

    pub(crate) fn get(&self, key: &Key) -> Option<&Registration> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, reg)| reg)
    }

    /// First registration of the given type, named or not.
    pub(crate) fn first_of_type(&self, type_id: TypeId) -> Option<&Registration> {
        self.entries
            .iter()
            .find(|(k, _)| k.bean_type() == type_id)
            .map(|(_, reg)| reg)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
