//! Product lines and the parts families that supply them.
//!
//! A parts family names the line it serves through its associated `Line`
//! type, and a ship factory for one line only accepts families of that line.
//! Mismatches are rejected by the compiler rather than checked at runtime.

use super::product::{Anchor, PartFamily, Wheel};

/// A ship product line.
pub trait ProductLine: Send + Sync + 'static {
    const COLOR: &'static str;
    const LOGO: &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteLine;

impl ProductLine for WhiteLine {
    const COLOR: &'static str = "white";
    const LOGO: &'static str = "\u{1F6E5}";
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlackLine;

impl ProductLine for BlackLine {
    const COLOR: &'static str = "black";
    const LOGO: &'static str = "\u{2693}";
}

/// Abstract factory for the parts of one product line.
///
/// # Examples
///
/// ```rust
/// use gof_creational::{ShipPartsFactory, WhiteShipPartsProFactory};
///
/// let parts = WhiteShipPartsProFactory;
/// assert!(parts.create_anchor().is_pro());
/// assert!(parts.create_wheel().is_pro());
/// ```
pub trait ShipPartsFactory: Send + Sync {
    type Line: ProductLine;

    fn create_anchor(&self) -> Anchor;

    fn create_wheel(&self) -> Wheel;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteShipPartsFactory;

impl ShipPartsFactory for WhiteShipPartsFactory {
    type Line = WhiteLine;

    fn create_anchor(&self) -> Anchor {
        Anchor::new(PartFamily::White)
    }

    fn create_wheel(&self) -> Wheel {
        Wheel::new(PartFamily::White)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteShipPartsProFactory;

impl ShipPartsFactory for WhiteShipPartsProFactory {
    type Line = WhiteLine;

    fn create_anchor(&self) -> Anchor {
        Anchor::new(PartFamily::WhitePro)
    }

    fn create_wheel(&self) -> Wheel {
        Wheel::new(PartFamily::WhitePro)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlackShipPartsFactory;

impl ShipPartsFactory for BlackShipPartsFactory {
    type Line = BlackLine;

    fn create_anchor(&self) -> Anchor {
        Anchor::new(PartFamily::Black)
    }

    fn create_wheel(&self) -> Wheel {
        Wheel::new(PartFamily::Black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of<P: ShipPartsFactory>(_parts: &P) -> &'static str {
        <P::Line as ProductLine>::COLOR
    }

    #[test]
    fn test_families_agree_with_their_line() {
        let white = WhiteShipPartsFactory;
        let pro = WhiteShipPartsProFactory;
        let black = BlackShipPartsFactory;

        assert_eq!(white.create_anchor().family().line_color(), line_of(&white));
        assert_eq!(pro.create_wheel().family().line_color(), line_of(&pro));
        assert_eq!(black.create_anchor().family().line_color(), line_of(&black));
    }
}
