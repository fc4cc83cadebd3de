//! Temperature & dew point group
use crate::units::Temperature;
use regex::Regex;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

lazy_static! {
    /// TT/DD, M prefix for negative values, dew point may be missing
    static ref TEMPERATURES: Regex =
        Regex::new(r"^(?P<temp>M?\d{2}|//)/(?P<dewpt>M?\d{2}|//)?$").unwrap();
}

/// Temperature group parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("malformed temperature group")]
    Malformed,
}

/// Parses a whole degrees Celsius value, "M" prefix means negative
pub(crate) fn parse_celsius(s: &str) -> Result<Temperature, Error> {
    let (sign, digits) = match s.strip_prefix('M') {
        Some(digits) => (-1.0, digits),
        None => (1.0, s),
    };
    let value = digits.parse::<f64>().map_err(|_| Error::Malformed)?;
    Ok(Temperature::celsius(sign * value))
}

/// Main body temperature & dew point, whole degrees Celsius
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperatures {
    pub temperature: Option<Temperature>,
    pub dewpoint: Option<Temperature>,
}

impl std::str::FromStr for Temperatures {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = TEMPERATURES.captures(s).ok_or(Error::Malformed)?;
        let temperature = match &caps["temp"] {
            "//" => None,
            temp => Some(parse_celsius(temp)?),
        };
        let dewpoint = match caps.name("dewpt").map(|m| m.as_str()) {
            Some("//") | None => None,
            Some(dewpt) => Some(parse_celsius(dewpt)?),
        };
        if temperature.is_none() && dewpoint.is_none() {
            return Err(Error::Malformed);
        }
        Ok(Self {
            temperature,
            dewpoint,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn temperatures() {
        let t = Temperatures::from_str("21/13").unwrap();
        assert_eq!(t.temperature, Some(Temperature::celsius(21.0)));
        assert_eq!(t.dewpoint, Some(Temperature::celsius(13.0)));

        let t = Temperatures::from_str("M05/M12").unwrap();
        assert_eq!(t.temperature, Some(Temperature::celsius(-5.0)));
        assert_eq!(t.dewpoint, Some(Temperature::celsius(-12.0)));

        let t = Temperatures::from_str("02/M01").unwrap();
        assert_eq!(t.temperature, Some(Temperature::celsius(2.0)));
        assert_eq!(t.dewpoint, Some(Temperature::celsius(-1.0)));

        let t = Temperatures::from_str("21/").unwrap();
        assert_eq!(t.dewpoint, None);
        let t = Temperatures::from_str("21///").unwrap();
        assert_eq!(t.dewpoint, None);
    }
    #[test]
    fn malformed_temperatures() {
        for group in ["21", "//////", "2/13", "21/1", "T21/13", "1/2SM", "M/13"] {
            assert_eq!(
                Temperatures::from_str(group),
                Err(Error::Malformed),
                "\"{}\" should not be a temperature group",
                group
            );
        }
    }
}
