//! Airport codes.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Error returned for a blank airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("airport code is empty")]
pub struct InvalidAirportCode;

/// An airport as named in a schedule.
///
/// Codes are opaque: IATA (`DHE`), ICAO (`LZIB`) or any other scheme the
/// schedule uses. Surrounding whitespace is dropped and case is kept, so
/// `dhe` and `DHE` are different airports. Clones share one allocation.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::AirportCode;
///
/// let bts = AirportCode::parse(" LZIB ").unwrap();
/// assert_eq!(bts.as_str(), "LZIB");
/// assert!(AirportCode::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode(Arc<str>);

impl AirportCode {
    /// Parse an airport code, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `Err` if nothing is left after trimming.
    pub fn parse(s: &str) -> Result<Self, InvalidAirportCode> {
        match s.trim() {
            "" => Err(InvalidAirportCode),
            code => Ok(Self(Arc::from(code))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AirportCode {
    type Err = InvalidAirportCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportCode({})", self.0)
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
