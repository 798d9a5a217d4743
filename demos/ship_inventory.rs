//! Builds a white ship from the pro parts family and prints its parts.
//!
//! Logging follows `SHIPYARD_LOG_PREFIX`, `SHIPYARD_LOG_PREPARATION` and
//! `SHIPYARD_LOG_NOTICES` when set.

use gof_creational::{ConfigProvider, PatternResult, Shipyard, WhiteShipFactory, WhiteShipPartsProFactory};

fn main() -> PatternResult<()> {
    let shipyard = Shipyard::from_config(&ConfigProvider::from_env());
    let factory = WhiteShipFactory::with_parts(WhiteShipPartsProFactory);

    let ship = shipyard.order(&factory, "Whiteship", "keesun@mail.com")?;

    if let (Some(anchor), Some(wheel)) = (ship.anchor(), ship.wheel()) {
        println!("anchor: {}", anchor.family());
        println!("wheel: {}", wheel.family());
    }
    Ok(())
}
