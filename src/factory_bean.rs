//! Factory beans: registrations that defer object creation to a factory.

use crate::error::PatternResult;
use crate::ship::{Ship, ShipFactory, WhiteShipFactory};

/// A bean whose registered object is whatever [`get_object`](FactoryBean::get_object) returns.
///
/// The container registers the object under `Self::Object`, not under the
/// factory's own type.
///
/// # Examples
///
/// ```rust
/// use gof_creational::{BeanCollection, FactoryBean, PatternResult};
/// use std::sync::Arc;
///
/// struct Counter(u32);
///
/// struct CounterFactory;
///
/// impl FactoryBean for CounterFactory {
///     type Object = Counter;
///
///     fn get_object(&self) -> PatternResult<Counter> {
///         Ok(Counter(0))
///     }
///
///     fn is_singleton(&self) -> bool {
///         false
///     }
/// }
///
/// let mut beans = BeanCollection::new();
/// beans.add_factory_bean(CounterFactory);
/// let context = beans.build();
///
/// let a = context.get_bean::<Counter>().unwrap();
/// let b = context.get_bean::<Counter>().unwrap();
/// assert!(!Arc::ptr_eq(&a, &b));
/// ```
pub trait FactoryBean: Send + Sync + 'static {
    type Object: Send + Sync + 'static;

    fn get_object(&self) -> PatternResult<Self::Object>;

    fn is_singleton(&self) -> bool {
        true
    }
}

/// Factory bean producing the white ship named `whiteship`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShipFactoryBean;

impl ShipFactoryBean {
    pub const SHIP_NAME: &'static str = "whiteship";
}

impl FactoryBean for ShipFactoryBean {
    type Object = Ship;

    fn get_object(&self) -> PatternResult<Ship> {
        let mut ship = WhiteShipFactory::new().create_ship();
        ship.set_name(Self::SHIP_NAME);
        Ok(ship)
    }
}
