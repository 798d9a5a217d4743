//! Ship construction: factory method and abstract factory.
//!
//! - [`order_ship`] runs the fixed ordering skeleton over any [`ShipFactory`].
//! - [`LineShipFactory`] is the concrete factory for a product line, with the
//!   [`WhiteShipFactory`] and [`BlackShipFactory`] aliases.
//! - [`ShipPartsFactory`] implementations are the parts families that a line
//!   factory may be wired to.

pub mod dispatch;
pub mod factories;
pub mod parts;
pub mod product;

pub use dispatch::{order_ship, Notice, ShipFactory, Shipyard};
pub use factories::{BlackShipFactory, LineShipFactory, WhiteShipFactory};
pub use parts::{
    BlackLine, BlackShipPartsFactory, ProductLine, ShipPartsFactory, WhiteLine, WhiteShipPartsFactory,
    WhiteShipPartsProFactory,
};
pub use product::{Anchor, PartFamily, Ship, Wheel};
