//! Sky condition groups
use crate::units::Distance;
use regex::Regex;
use std::str::FromStr;
use strum_macros::EnumString;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref SKY: Regex = Regex::new(
        r"^(?P<cover>SKC|CLR|NSC|NCD|FEW|SCT|BKN|OVC|VV)(?P<height>\d{3}|///)?(?P<cloud>CB|TCU|///)?$"
    )
    .unwrap();
}

/// Sky condition parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("malformed sky condition group")]
    Malformed,
    #[error("cloud layer without height")]
    MissingHeight,
}

/// Sky coverage
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Coverage {
    /// Sky clear (human observer)
    #[strum(serialize = "SKC")]
    SkyClear,
    /// No clouds detected below 12000 ft (automated station)
    #[strum(serialize = "CLR")]
    Clear,
    /// No significant clouds
    #[strum(serialize = "NSC")]
    NoSignificantClouds,
    /// No clouds detected
    #[strum(serialize = "NCD")]
    NoCloudsDetected,
    /// 1 to 2 oktas
    #[strum(serialize = "FEW")]
    Few,
    /// 3 to 4 oktas
    #[strum(serialize = "SCT")]
    Scattered,
    /// 5 to 7 oktas
    #[strum(serialize = "BKN")]
    Broken,
    /// 8 oktas
    #[strum(serialize = "OVC")]
    Overcast,
    /// Sky obscured, vertical visibility
    #[strum(serialize = "VV")]
    VerticalVisibility,
}

impl Coverage {
    /// Returns true if this coverage describes a clear sky
    pub fn is_clear(&self) -> bool {
        matches!(
            self,
            Self::SkyClear | Self::Clear | Self::NoSignificantClouds | Self::NoCloudsDetected
        )
    }
    /// Returns true if this layer forms a ceiling
    pub fn is_ceiling(&self) -> bool {
        matches!(
            self,
            Self::Broken | Self::Overcast | Self::VerticalVisibility
        )
    }
}

impl std::fmt::Display for Coverage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::SkyClear | Self::Clear => "clear".fmt(f),
            Self::NoSignificantClouds => "no significant clouds".fmt(f),
            Self::NoCloudsDetected => "no clouds detected".fmt(f),
            Self::Few => "a few".fmt(f),
            Self::Scattered => "scattered".fmt(f),
            Self::Broken => "broken".fmt(f),
            Self::Overcast => "overcast".fmt(f),
            Self::VerticalVisibility => "indefinite ceiling".fmt(f),
        }
    }
}

/// Significant convective clouds
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloudType {
    #[strum(serialize = "CB")]
    Cumulonimbus,
    #[strum(serialize = "TCU")]
    ToweringCumulus,
}

impl std::fmt::Display for CloudType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Cumulonimbus => "cumulonimbus".fmt(f),
            Self::ToweringCumulus => "towering cumulus".fmt(f),
        }
    }
}

/// One sky condition group, like "BKN025CB"
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyCondition {
    pub coverage: Coverage,
    /// Layer base (or vertical visibility) above ground level,
    /// None when clear or not measured (///)
    pub height: Option<Distance>,
    pub cloud: Option<CloudType>,
}

impl FromStr for SkyCondition {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = SKY.captures(s).ok_or(Error::Malformed)?;
        let coverage = Coverage::from_str(&caps["cover"]).map_err(|_| Error::Malformed)?;
        let height = match caps.name("height").map(|m| m.as_str()) {
            Some("///") | None => None,
            Some(hundreds) => {
                let hundreds = hundreds.parse::<f64>().map_err(|_| Error::Malformed)?;
                Some(Distance::feet(hundreds * 100.0))
            },
        };
        if coverage.is_clear() {
            if caps.name("height").is_some() || caps.name("cloud").is_some() {
                return Err(Error::Malformed);
            }
        } else if caps.name("height").is_none() {
            return Err(Error::MissingHeight);
        }
        let cloud = match caps.name("cloud").map(|m| m.as_str()) {
            Some("///") | None => None,
            Some(cloud) => Some(CloudType::from_str(cloud).map_err(|_| Error::Malformed)?),
        };
        Ok(Self {
            coverage,
            height,
            cloud,
        })
    }
}

impl std::fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.coverage.is_clear() {
            return write!(f, "{}", self.coverage);
        }
        if self.coverage == Coverage::VerticalVisibility {
            return match self.height {
                Some(height) => write!(f, "indefinite ceiling, vertical visibility to {}", height),
                None => write!(f, "{}", self.coverage),
            };
        }
        match self.cloud {
            Some(cloud) => write!(f, "{} {}", self.coverage, cloud)?,
            None if self.coverage == Coverage::Overcast => write!(f, "{}", self.coverage)?,
            None => write!(f, "{} clouds", self.coverage)?,
        }
        if let Some(height) = self.height {
            write!(f, " at {}", height)?;
        }
        Ok(())
    }
}
