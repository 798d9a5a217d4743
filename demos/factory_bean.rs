//! Resolves a ship from the bean container through a factory bean.

use gof_creational::{BeanCollection, PatternResult, Ship, ShipFactoryBean};

fn main() -> PatternResult<()> {
    let mut beans = BeanCollection::new();
    beans.add_factory_bean(ShipFactoryBean);

    let context = beans.build();
    let whiteship = context.get_bean::<Ship>()?;
    println!("{}", whiteship.name());
    Ok(())
}
