//! Error types for the pattern demonstrations.

use std::fmt;

/// Errors raised by the singleton holders, the ship dispatch and the bean container.
///
/// Every variant is surfaced straight to the caller; nothing in the crate
/// retries or recovers locally.
///
/// # Examples
///
/// ```rust
/// use gof_creational::{order_ship, NoopObserver, PatternError, WhiteShipFactory};
///
/// let factory = WhiteShipFactory::new();
/// match order_ship(&factory, "  ", "keesun@mail.com", &NoopObserver) {
///     Err(PatternError::InvalidArgument(message)) => {
///         assert_eq!(message, "ship name required.");
///     }
///     _ => unreachable!(),
/// }
/// ```
///
/// ```rust
/// use gof_creational::PatternError;
///
/// let closed = PatternError::IllegalConstruction("Cannot reflectively create enum objects");
/// let missing = PatternError::BeanNotFound("hello".to_string());
///
/// println!("Error: {}", closed);
/// println!("Error: {}", missing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Required argument missing or blank
    InvalidArgument(&'static str),
    /// Construction attempted against a closed singleton
    IllegalConstruction(&'static str),
    /// Hidden constructor invoked before it was made accessible
    IllegalAccess(&'static str),
    /// Encoding or decoding of a singleton snapshot failed
    Serialization(String),
    /// Reader or writer failure during a round-trip
    Io(String),
    /// No bean registered for the requested type or name
    BeanNotFound(String),
    /// Bean downcast failed
    BeanTypeMismatch(&'static str),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            PatternError::IllegalConstruction(msg) => write!(f, "Illegal construction: {}", msg),
            PatternError::IllegalAccess(msg) => write!(f, "Illegal access: {}", msg),
            PatternError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
            PatternError::Io(msg) => write!(f, "I/O failed: {}", msg),
            PatternError::BeanNotFound(name) => write!(f, "Bean not found: {}", name),
            PatternError::BeanTypeMismatch(name) => write!(f, "Bean type mismatch for: {}", name),
        }
    }
}

impl std::error::Error for PatternError {}

impl From<serde_json::Error> for PatternError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            PatternError::Io(err.to_string())
        } else {
            PatternError::Serialization(err.to_string())
        }
    }
}

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;
