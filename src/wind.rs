//! Surface wind groups
use crate::units::{Speed, SpeedUnit};
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

lazy_static! {
    /// dddff(f)Gff(f)KT, VRBff(f)KT, /////KT
    static ref WIND: Regex = Regex::new(
        r"^(?P<dir>\d{3}|VRB|///)(?P<speed>P?\d{2,3}|//)(?:G(?P<gust>P?\d{2,3}))?(?P<unit>KT|MPS|KMH)$"
    )
    .unwrap();
    /// dddVddd
    static ref SECTOR: Regex = Regex::new(r"^(?P<from>\d{3})V(?P<to>\d{3})$").unwrap();
}

/// Wind group parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("malformed wind group")]
    Malformed,
    #[error("wind direction out of range")]
    InvalidDirection,
}

/// Direction the wind blows from
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WindDirection {
    /// True north referenced angle, in degrees (0..=360)
    Degrees(u16),
    /// Variable direction (VRB)
    Variable,
}

impl WindDirection {
    /// Returns angle in degrees, None when variable
    pub fn degrees(&self) -> Option<u16> {
        match self {
            Self::Degrees(d) => Some(*d),
            Self::Variable => None,
        }
    }
}

fn parse_degrees(s: &str) -> Result<u16, Error> {
    let deg = s.parse::<u16>().map_err(|_| Error::Malformed)?;
    if deg > 360 {
        Err(Error::InvalidDirection)
    } else {
        Ok(deg)
    }
}

/// Variable wind sector (dddVddd), following the wind group
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindSector {
    pub from: u16,
    pub to: u16,
}

impl FromStr for WindSector {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = SECTOR.captures(s).ok_or(Error::Malformed)?;
        Ok(Self {
            from: parse_degrees(&caps["from"])?,
            to: parse_degrees(&caps["to"])?,
        })
    }
}

/// Surface wind
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    /// Wind direction, None when not reported (///)
    pub direction: Option<WindDirection>,
    /// Mean speed, None when not reported (//)
    pub speed: Option<Speed>,
    /// Gust speed
    pub gust: Option<Speed>,
    /// Variable sector, when reported
    pub variable_sector: Option<WindSector>,
}

impl Wind {
    /// Returns true if wind is calm (00000KT)
    pub fn is_calm(&self) -> bool {
        self.speed.map(|s| s.value == 0.0).unwrap_or(false) && self.gust.is_none()
    }
}

fn parse_speed(s: &str, unit: SpeedUnit) -> Result<Speed, Error> {
    // "P" prefix: greater than, we keep the upper bound
    let value = s
        .trim_start_matches('P')
        .parse::<f64>()
        .map_err(|_| Error::Malformed)?;
    Ok(Speed::new(value, unit))
}

impl FromStr for Wind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = WIND.captures(s).ok_or(Error::Malformed)?;
        let unit = SpeedUnit::from_str(&caps["unit"]).map_err(|_| Error::Malformed)?;
        let direction = match &caps["dir"] {
            "VRB" => Some(WindDirection::Variable),
            "///" => None,
            deg => Some(WindDirection::Degrees(parse_degrees(deg)?)),
        };
        let speed = match &caps["speed"] {
            "//" => None,
            speed => Some(parse_speed(speed, unit)?),
        };
        let gust = match caps.name("gust") {
            Some(gust) => Some(parse_speed(gust.as_str(), unit)?),
            None => None,
        };
        Ok(Self {
            direction,
            speed,
            gust,
            variable_sector: None,
        })
    }
}
