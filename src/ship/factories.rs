//! Concrete ship factories.

use std::fmt;
use std::marker::PhantomData;

use super::dispatch::{Notice, ShipFactory};
use super::parts::{BlackLine, ProductLine, ShipPartsFactory, WhiteLine};
use super::product::Ship;

/// Ship factory for one product line, optionally wired to a parts family.
///
/// Without parts it is a plain factory method; with parts it delegates
/// anchor and wheel creation to the family. The family's `Line` must equal
/// the factory's, so a white factory cannot be given black parts:
///
/// ```compile_fail
/// use gof_creational::{BlackShipPartsFactory, WhiteShipFactory};
///
/// let factory = WhiteShipFactory::with_parts(BlackShipPartsFactory);
/// ```
///
/// # Examples
///
/// ```rust
/// use gof_creational::{ShipFactory, WhiteShipFactory, WhiteShipPartsFactory};
///
/// let plain = WhiteShipFactory::new().create_ship();
/// assert!(plain.anchor().is_none());
///
/// let assembled = WhiteShipFactory::with_parts(WhiteShipPartsFactory).create_ship();
/// assert_eq!(assembled.anchor().unwrap().family().as_str(), "white");
/// ```
pub struct LineShipFactory<L: ProductLine> {
    parts: Option<Box<dyn ShipPartsFactory<Line = L>>>,
    _line: PhantomData<L>,
}

pub type WhiteShipFactory = LineShipFactory<WhiteLine>;
pub type BlackShipFactory = LineShipFactory<BlackLine>;

impl<L: ProductLine> LineShipFactory<L> {
    /// Factory that builds ships without parts.
    pub fn new() -> Self {
        Self { parts: None, _line: PhantomData }
    }

    /// Factory that fits every ship with parts from `parts`.
    pub fn with_parts<P>(parts: P) -> Self
    where
        P: ShipPartsFactory<Line = L> + 'static,
    {
        Self { parts: Some(Box::new(parts)), _line: PhantomData }
    }

    pub fn has_parts(&self) -> bool {
        self.parts.is_some()
    }
}

impl<L: ProductLine> Default for LineShipFactory<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ProductLine> fmt::Debug for LineShipFactory<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineShipFactory")
            .field("line", &L::COLOR)
            .field("has_parts", &self.has_parts())
            .finish()
    }
}

impl<L: ProductLine> ShipFactory for LineShipFactory<L> {
    fn create_ship(&self) -> Ship {
        let ship = Ship::new(L::COLOR).with_logo(L::LOGO);
        match &self.parts {
            Some(parts) => ship.with_parts(parts.create_anchor(), parts.create_wheel()),
            None => ship,
        }
    }

    fn notify(&self, email: &str, ship: &Ship) -> Notice {
        Notice::new(email, ship.name(), format!("{} ship {} is ready", L::COLOR, ship.name()))
    }
}
