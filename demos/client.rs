//! Orders one ship from each line and prints it.

use gof_creational::{BlackShipFactory, LoggingObserver, PatternResult, ShipFactory, Shipyard, WhiteShipFactory};
use std::sync::Arc;

fn print(shipyard: &Shipyard, factory: &dyn ShipFactory, name: &str, email: &str) -> PatternResult<()> {
    println!("{}", shipyard.order(factory, name, email)?);
    Ok(())
}

fn main() -> PatternResult<()> {
    let mut shipyard = Shipyard::new();
    shipyard.add_observer(Arc::new(LoggingObserver::new()));

    print(&shipyard, &WhiteShipFactory::new(), "Whiteship", "keesun@mail.com")?;
    print(&shipyard, &BlackShipFactory::new(), "Blackship", "keesun@mail.com")?;
    Ok(())
}
