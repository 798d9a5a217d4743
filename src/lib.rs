//! # gof-creational
//!
//! Creational design patterns expressed in Rust: singleton holders, factory
//! method, abstract factory, and a small bean container with factory beans.
//!
//! ## Features
//!
//! - **Singleton holders**: lazy one-time-init, mutex-guarded, and enum-based
//!   variants sharing one mutable `number` field
//! - **Constructor escape hatch**: shows which holders can be bypassed
//! - **Serialization round-trips**: explicit post-decode resolution hook
//! - **Factory method**: a fixed ordering skeleton over pluggable steps
//! - **Abstract factory**: parts families paired with lines at compile time
//! - **Bean container**: singleton and prototype beans, factory beans
//!
//! ## Singletons
//!
//! ```rust
//! use gof_creational::{from_bytes, to_bytes, PlainSettings, Settings};
//!
//! let settings = Settings::get_instance();
//! assert!(std::ptr::eq(settings, Settings::get_instance()));
//!
//! // The resolution hook hands back the canonical instance...
//! let decoded = from_bytes::<Settings>(&to_bytes(settings).unwrap()).unwrap();
//! assert!(std::ptr::eq(settings, &*decoded));
//!
//! // ...and without it the round-trip produces a second instance.
//! let plain = PlainSettings::get_instance();
//! let decoded = from_bytes::<PlainSettings>(&to_bytes(plain).unwrap()).unwrap();
//! assert!(!std::ptr::eq(plain, &*decoded));
//! ```
//!
//! ## Ordering ships
//!
//! ```rust
//! use gof_creational::{order_ship, NoopObserver, WhiteShipFactory, WhiteShipPartsProFactory};
//!
//! let factory = WhiteShipFactory::with_parts(WhiteShipPartsProFactory);
//! let ship = order_ship(&factory, "Whiteship", "keesun@mail.com", &NoopObserver).unwrap();
//!
//! assert_eq!(ship.name(), "Whiteship");
//! assert_eq!(ship.color(), "white");
//! assert!(ship.anchor().unwrap().is_pro());
//! assert!(ship.wheel().unwrap().is_pro());
//! ```
//!
//! ## Cargo features
//!
//! - `parking-lot`: use `parking_lot::Mutex` for the singleton guards
//! - `once-cell`: use `once_cell::sync::OnceCell` for one-time initialisation
//! - `performance`: both of the above

pub mod collection;
pub mod config;
pub mod error;
pub mod factory_bean;
pub mod key;
pub mod lifetime;
pub mod observer;
pub mod provider;
pub mod ship;
pub mod singleton;

mod registration;
mod sync;

pub use collection::BeanCollection;
pub use config::{ConfigProvider, ConfigSource, ConfigValue, EnvironmentConfigSource, JsonConfigSource};
pub use error::{PatternError, PatternResult};
pub use factory_bean::{FactoryBean, ShipFactoryBean};
pub use key::Key;
pub use lifetime::Lifetime;
pub use observer::{LoggingObserver, NoopObserver, Observers, OrderObserver};
pub use provider::ApplicationContext;
pub use ship::{
    order_ship, Anchor, BlackLine, BlackShipFactory, BlackShipPartsFactory, LineShipFactory, Notice, PartFamily,
    ProductLine, Ship, ShipFactory, ShipPartsFactory, Shipyard, Wheel, WhiteLine, WhiteShipFactory,
    WhiteShipPartsFactory, WhiteShipPartsProFactory,
};
pub use singleton::{
    from_bytes, read_object, to_bytes, write_object, Constructor, DecodeToken, DeclaredConstructors, EnumSettings,
    PlainSettings, ResolveHook, Resolved, Settings, Snapshot,
};
