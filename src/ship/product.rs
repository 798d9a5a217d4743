//! Ships and their parts.

use std::fmt;

/// Product family a part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartFamily {
    White,
    WhitePro,
    Black,
}

impl PartFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            PartFamily::White => "white",
            PartFamily::WhitePro => "white-pro",
            PartFamily::Black => "black",
        }
    }

    /// Color of the ship line this family belongs to.
    pub fn line_color(self) -> &'static str {
        match self {
            PartFamily::White | PartFamily::WhitePro => "white",
            PartFamily::Black => "black",
        }
    }

    pub fn is_pro(self) -> bool {
        matches!(self, PartFamily::WhitePro)
    }
}

impl fmt::Display for PartFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    family: PartFamily,
}

impl Anchor {
    pub fn new(family: PartFamily) -> Self {
        Self { family }
    }

    pub fn family(&self) -> PartFamily {
        self.family
    }

    pub fn is_pro(&self) -> bool {
        self.family.is_pro()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wheel {
    family: PartFamily,
}

impl Wheel {
    pub fn new(family: PartFamily) -> Self {
        Self { family }
    }

    pub fn family(&self) -> PartFamily {
        self.family
    }

    pub fn is_pro(&self) -> bool {
        self.family.is_pro()
    }
}

/// A finished (or, inside a factory, not yet named) ship.
///
/// Everything but the name is fixed when the ship is built. The name is
/// assigned by [`order_ship`](crate::order_ship) once the factory returns.
///
/// # Examples
///
/// ```rust
/// use gof_creational::{Anchor, PartFamily, Ship, Wheel};
///
/// let ship = Ship::new("white")
///     .with_logo("🛥")
///     .with_parts(Anchor::new(PartFamily::White), Wheel::new(PartFamily::White));
///
/// assert_eq!(ship.name(), "");
/// assert_eq!(ship.color(), "white");
/// assert_eq!(ship.to_string(), "Ship{name='', color='white', logo='🛥'}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    name: String,
    color: String,
    logo: Option<String>,
    anchor: Option<Anchor>,
    wheel: Option<Wheel>,
}

impl Ship {
    /// Creates an unnamed ship of the given color.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            color: color.into(),
            logo: None,
            anchor: None,
            wheel: None,
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    pub fn with_parts(mut self, anchor: Anchor, wheel: Wheel) -> Self {
        self.anchor = Some(anchor);
        self.wheel = Some(wheel);
        self
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    pub fn wheel(&self) -> Option<&Wheel> {
        self.wheel.as_ref()
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship{{name='{}', color='{}', logo='{}'}}",
            self.name,
            self.color,
            self.logo.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_tags() {
        assert_eq!(PartFamily::WhitePro.to_string(), "white-pro");
        assert_eq!(PartFamily::WhitePro.line_color(), "white");
        assert!(PartFamily::WhitePro.is_pro());
        assert!(!PartFamily::Black.is_pro());
    }

    #[test]
    fn test_bare_ship_has_no_parts() {
        let ship = Ship::new("black");
        assert!(ship.anchor().is_none());
        assert!(ship.wheel().is_none());
        assert!(ship.logo().is_none());
        assert_eq!(ship.to_string(), "Ship{name='', color='black', logo=''}");
    }
}
