//! The ship ordering protocol.
//!
//! [`order_ship`] is the fixed skeleton. Concrete factories only supply the
//! two [`ShipFactory`] steps: building the ship and writing the notice.

use std::sync::Arc;

use super::product::Ship;
use crate::config::ConfigProvider;
use crate::error::{PatternError, PatternResult};
use crate::observer::{LoggingObserver, Observers, OrderObserver};

/// Message sent to the customer once a ship is finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub to: String,
    pub ship_name: String,
    pub message: String,
}

impl Notice {
    pub fn new(to: impl Into<String>, ship_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            ship_name: ship_name.into(),
            message: message.into(),
        }
    }
}

/// The pluggable steps of a ship order.
pub trait ShipFactory: Send + Sync {
    /// Builds an unnamed ship.
    fn create_ship(&self) -> Ship;

    /// Writes the notice for a finished, named ship.
    fn notify(&self, email: &str, ship: &Ship) -> Notice;
}

/// Orders a ship from `factory`.
///
/// The sequence is fixed: validate the name, validate the contact, report
/// preparation, build, name the ship, report the notice, return. Validation
/// failures return before the observer or the factory is touched.
///
/// # Errors
///
/// [`PatternError::InvalidArgument`] when `name` or `email` is blank.
///
/// # Examples
///
/// ```rust
/// use gof_creational::{order_ship, BlackShipFactory, NoopObserver, WhiteShipFactory};
///
/// let whiteship = order_ship(&WhiteShipFactory::new(), "Whiteship", "keesun@mail.com", &NoopObserver).unwrap();
/// let blackship = order_ship(&BlackShipFactory::new(), "Blackship", "keesun@mail.com", &NoopObserver).unwrap();
///
/// assert_eq!(whiteship.name(), "Whiteship");
/// assert_eq!(whiteship.color(), "white");
/// assert_eq!(blackship.color(), "black");
/// ```
pub fn order_ship<F>(factory: &F, name: &str, email: &str, observer: &dyn OrderObserver) -> PatternResult<Ship>
where
    F: ShipFactory + ?Sized,
{
    validate(name, email)?;
    observer.preparing(name);

    let mut ship = factory.create_ship();
    ship.set_name(name);

    let notice = factory.notify(email, &ship);
    observer.notified(&notice);
    Ok(ship)
}

fn validate(name: &str, email: &str) -> PatternResult<()> {
    if name.trim().is_empty() {
        return Err(PatternError::InvalidArgument("ship name required."));
    }
    if email.trim().is_empty() {
        return Err(PatternError::InvalidArgument("contact required."));
    }
    Ok(())
}

/// Order desk that reports every order to its observers.
///
/// # Examples
///
/// ```rust
/// use gof_creational::{Shipyard, WhiteShipFactory, WhiteShipPartsProFactory};
///
/// let shipyard = Shipyard::new();
/// let factory = WhiteShipFactory::with_parts(WhiteShipPartsProFactory);
/// let ship = shipyard.order(&factory, "Whiteship", "keesun@mail.com").unwrap();
///
/// assert!(ship.anchor().unwrap().is_pro());
/// ```
#[derive(Default, Clone)]
pub struct Shipyard {
    observers: Observers,
}

impl Shipyard {
    pub fn new() -> Self {
        Self { observers: Observers::new() }
    }

    /// Shipyard that logs through a [`LoggingObserver`] built from `config`.
    pub fn from_config(config: &ConfigProvider) -> Self {
        let mut shipyard = Self::new();
        shipyard.add_observer(Arc::new(LoggingObserver::from_config(config)));
        shipyard
    }

    pub fn add_observer(&mut self, observer: Arc<dyn OrderObserver>) -> &mut Self {
        self.observers.add(observer);
        self
    }

    pub fn observers(&self) -> &Observers {
        &self.observers
    }

    pub fn order(&self, factory: &dyn ShipFactory, name: &str, email: &str) -> PatternResult<Ship> {
        order_ship(factory, name, email, &self.observers)
    }
}
