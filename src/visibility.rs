//! Prevailing visibility
use crate::units::{Distance, DistanceUnit};
use regex::Regex;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

lazy_static! {
    /// 10SM, 1/2SM, 1 1/2SM, M1/4SM, P6SM
    static ref MILES: Regex = Regex::new(
        r"^(?P<bound>[MP])?(?P<value>\d{1,2}|\d{1,2} \d/\d{1,2}|\d/\d{1,2})SM$"
    )
    .unwrap();
    /// 0800, 4000NE, 9999, 10KM
    static ref METERS: Regex = Regex::new(
        r"^(?P<meters>\d{4})(?:NDV|NE|NW|SE|SW|N|E|S|W)?$|^(?P<km>\d{1,2})KM$"
    )
    .unwrap();
}

/// Visibility group parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("malformed visibility group")]
    Malformed,
    #[error("null fraction denominator")]
    NullDenominator,
}

/// Prevailing visibility
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Visibility {
    /// Measured distance
    Measured(Distance),
    /// Visibility is at least this distance (P6SM, 9999)
    AtLeast(Distance),
    /// Visibility is less than this distance (M1/4SM)
    LessThan(Distance),
    /// Ceiling and visibility OK
    Cavok,
}

impl Visibility {
    /// Returns visibility distance.
    /// CAVOK is interpreted as 10 km or more.
    pub fn distance(&self) -> Distance {
        match self {
            Self::Measured(d) | Self::AtLeast(d) | Self::LessThan(d) => *d,
            Self::Cavok => Distance::meters(10_000.0),
        }
    }
}

/// Parses "1", "1/2" or "1 1/2"
fn parse_fraction(s: &str) -> Result<f64, Error> {
    let mut value = 0.0_f64;
    for item in s.split_ascii_whitespace() {
        match item.split_once('/') {
            Some((num, den)) => {
                let num = num.parse::<f64>().map_err(|_| Error::Malformed)?;
                let den = den.parse::<f64>().map_err(|_| Error::Malformed)?;
                if den == 0.0 {
                    return Err(Error::NullDenominator);
                }
                value += num / den;
            },
            None => {
                value += item.parse::<f64>().map_err(|_| Error::Malformed)?;
            },
        }
    }
    Ok(value)
}

impl std::str::FromStr for Visibility {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "CAVOK" {
            return Ok(Self::Cavok);
        }
        if let Some(caps) = MILES.captures(s) {
            let distance = Distance::miles(parse_fraction(&caps["value"])?);
            return match caps.name("bound").map(|b| b.as_str()) {
                Some("M") => Ok(Self::LessThan(distance)),
                Some("P") => Ok(Self::AtLeast(distance)),
                _ => Ok(Self::Measured(distance)),
            };
        }
        let caps = METERS.captures(s).ok_or(Error::Malformed)?;
        if let Some(km) = caps.name("km") {
            let km = km.as_str().parse::<f64>().map_err(|_| Error::Malformed)?;
            return Ok(Self::Measured(Distance::new(km, DistanceUnit::Kilometers)));
        }
        match &caps["meters"] {
            "9999" => Ok(Self::AtLeast(Distance::meters(10_000.0))),
            meters => {
                let meters = meters.parse::<f64>().map_err(|_| Error::Malformed)?;
                Ok(Self::Measured(Distance::meters(meters)))
            },
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Measured(d) => write!(f, "{}", d),
            Self::AtLeast(d) => write!(f, "greater than {}", d),
            Self::LessThan(d) => write!(f, "less than {}", d),
            Self::Cavok => write!(f, "CAVOK"),
        }
    }
}
