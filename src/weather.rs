//! Present weather phenomena
use itertools::Itertools;
use regex::Regex;
use std::str::FromStr;
use strum_macros::EnumString;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref WEATHER: Regex = Regex::new(
        r"^(?P<int>[-+]|VC)?(?P<desc>MI|PR|BC|DR|BL|SH|TS|FZ)?(?P<prec>(?:DZ|RA|SN|SG|IC|PL|GR|GS|UP)*)(?P<obsc>BR|FG|FU|VA|DU|SA|HZ|PY)?(?P<other>PO|SQ|FC|SS|DS)?$"
    )
    .unwrap();
}

/// Present weather parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("malformed weather group")]
    Malformed,
    #[error("no phenomenon described")]
    NoPhenomenon,
}

/// Intensity or proximity qualifier
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Intensity {
    #[strum(serialize = "-")]
    Light,
    #[default]
    #[strum(serialize = "")]
    Moderate,
    #[strum(serialize = "+")]
    Heavy,
    /// In the vicinity of the station
    #[strum(serialize = "VC")]
    Vicinity,
}

/// Weather descriptors
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Descriptor {
    #[strum(serialize = "MI")]
    Shallow,
    #[strum(serialize = "PR")]
    Partial,
    #[strum(serialize = "BC")]
    Patches,
    #[strum(serialize = "DR")]
    LowDrifting,
    #[strum(serialize = "BL")]
    Blowing,
    #[strum(serialize = "SH")]
    Showers,
    #[strum(serialize = "TS")]
    Thunderstorm,
    #[strum(serialize = "FZ")]
    Freezing,
}

impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Shallow => "shallow".fmt(f),
            Self::Partial => "partial".fmt(f),
            Self::Patches => "patches of".fmt(f),
            Self::LowDrifting => "low drifting".fmt(f),
            Self::Blowing => "blowing".fmt(f),
            Self::Showers => "showers".fmt(f),
            Self::Thunderstorm => "thunderstorm".fmt(f),
            Self::Freezing => "freezing".fmt(f),
        }
    }
}

/// Weather phenomena: precipitation, obscuration & others
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phenomenon {
    #[strum(serialize = "DZ")]
    Drizzle,
    #[strum(serialize = "RA")]
    Rain,
    #[strum(serialize = "SN")]
    Snow,
    #[strum(serialize = "SG")]
    SnowGrains,
    #[strum(serialize = "IC")]
    IceCrystals,
    #[strum(serialize = "PL")]
    IcePellets,
    #[strum(serialize = "GR")]
    Hail,
    #[strum(serialize = "GS")]
    SmallHail,
    #[strum(serialize = "UP")]
    UnknownPrecipitation,
    #[strum(serialize = "BR")]
    Mist,
    #[strum(serialize = "FG")]
    Fog,
    #[strum(serialize = "FU")]
    Smoke,
    #[strum(serialize = "VA")]
    VolcanicAsh,
    #[strum(serialize = "DU")]
    Dust,
    #[strum(serialize = "SA")]
    Sand,
    #[strum(serialize = "HZ")]
    Haze,
    #[strum(serialize = "PY")]
    Spray,
    #[strum(serialize = "PO")]
    DustWhirls,
    #[strum(serialize = "SQ")]
    Squalls,
    #[strum(serialize = "FC")]
    FunnelCloud,
    #[strum(serialize = "SS")]
    Sandstorm,
    #[strum(serialize = "DS")]
    Duststorm,
}

impl Phenomenon {
    /// Returns true if this is a precipitation
    pub fn is_precipitation(&self) -> bool {
        matches!(
            self,
            Self::Drizzle
                | Self::Rain
                | Self::Snow
                | Self::SnowGrains
                | Self::IceCrystals
                | Self::IcePellets
                | Self::Hail
                | Self::SmallHail
                | Self::UnknownPrecipitation
        )
    }
}

impl std::fmt::Display for Phenomenon {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Drizzle => "drizzle".fmt(f),
            Self::Rain => "rain".fmt(f),
            Self::Snow => "snow".fmt(f),
            Self::SnowGrains => "snow grains".fmt(f),
            Self::IceCrystals => "ice crystals".fmt(f),
            Self::IcePellets => "ice pellets".fmt(f),
            Self::Hail => "hail".fmt(f),
            Self::SmallHail => "snow pellets".fmt(f),
            Self::UnknownPrecipitation => "unknown precipitation".fmt(f),
            Self::Mist => "mist".fmt(f),
            Self::Fog => "fog".fmt(f),
            Self::Smoke => "smoke".fmt(f),
            Self::VolcanicAsh => "volcanic ash".fmt(f),
            Self::Dust => "dust".fmt(f),
            Self::Sand => "sand".fmt(f),
            Self::Haze => "haze".fmt(f),
            Self::Spray => "spray".fmt(f),
            Self::DustWhirls => "sand whirls".fmt(f),
            Self::Squalls => "squalls".fmt(f),
            Self::FunnelCloud => "funnel cloud".fmt(f),
            Self::Sandstorm => "sandstorm".fmt(f),
            Self::Duststorm => "dust storm".fmt(f),
        }
    }
}

/// One present weather group, like "-SHRA" or "BR"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weather {
    pub intensity: Intensity,
    pub descriptor: Option<Descriptor>,
    /// Phenomena, in order of appearance
    pub phenomena: Vec<Phenomenon>,
}

impl FromStr for Weather {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = WEATHER.captures(s).ok_or(Error::Malformed)?;
        let intensity = match caps.name("int") {
            Some(int) => Intensity::from_str(int.as_str()).map_err(|_| Error::Malformed)?,
            None => Intensity::Moderate,
        };
        let descriptor = match caps.name("desc") {
            Some(desc) => Some(Descriptor::from_str(desc.as_str()).map_err(|_| Error::Malformed)?),
            None => None,
        };
        let mut phenomena = Vec::with_capacity(2);
        let prec = caps.name("prec").map(|m| m.as_str()).unwrap_or("");
        // precipitation codes are 2 character long
        for i in (0..prec.len()).step_by(2) {
            phenomena
                .push(Phenomenon::from_str(&prec[i..i + 2]).map_err(|_| Error::Malformed)?);
        }
        for key in ["obsc", "other"] {
            if let Some(m) = caps.name(key) {
                phenomena.push(Phenomenon::from_str(m.as_str()).map_err(|_| Error::Malformed)?);
            }
        }
        // a lonely descriptor is valid (TS, thunderstorm), a lonely intensity is not
        if descriptor.is_none() && phenomena.is_empty() {
            return Err(Error::NoPhenomenon);
        }
        Ok(Self {
            intensity,
            descriptor,
            phenomena,
        })
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut items = Vec::<String>::with_capacity(4);
        match self.intensity {
            Intensity::Light => items.push("light".to_string()),
            Intensity::Heavy => items.push("heavy".to_string()),
            _ => {},
        }
        // showers follow the phenomena: "rain showers"
        let showers = self.descriptor == Some(Descriptor::Showers);
        if let Some(descriptor) = self.descriptor.filter(|_| !showers) {
            items.push(descriptor.to_string());
        }
        items.push(self.phenomena.iter().join(" and "));
        if showers {
            items.push(Descriptor::Showers.to_string());
        }
        if self.intensity == Intensity::Vicinity {
            items.push("in the vicinity".to_string());
        }
        write!(
            f,
            "{}",
            items.iter().filter(|item| !item.is_empty()).join(" ")
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn weather_parsing() {
        let wx = Weather::from_str("-RA").unwrap();
        assert_eq!(wx.intensity, Intensity::Light);
        assert_eq!(wx.descriptor, None);
        assert_eq!(wx.phenomena, vec![Phenomenon::Rain]);
        assert_eq!(wx.to_string(), "light rain");

        let wx = Weather::from_str("+TSRAGR").unwrap();
        assert_eq!(wx.intensity, Intensity::Heavy);
        assert_eq!(wx.descriptor, Some(Descriptor::Thunderstorm));
        assert_eq!(wx.phenomena, vec![Phenomenon::Rain, Phenomenon::Hail]);
        assert_eq!(wx.to_string(), "heavy thunderstorm rain and hail");

        let wx = Weather::from_str("BR").unwrap();
        assert_eq!(wx.intensity, Intensity::Moderate);
        assert_eq!(wx.phenomena, vec![Phenomenon::Mist]);
        assert!(!wx.phenomena[0].is_precipitation());
        assert_eq!(wx.to_string(), "mist");

        let wx = Weather::from_str("VCSH").unwrap();
        assert_eq!(wx.intensity, Intensity::Vicinity);
        assert_eq!(wx.to_string(), "showers in the vicinity");

        let wx = Weather::from_str("FZFG").unwrap();
        assert_eq!(wx.to_string(), "freezing fog");

        let wx = Weather::from_str("TS").unwrap();
        assert_eq!(wx.descriptor, Some(Descriptor::Thunderstorm));
        assert!(wx.phenomena.is_empty());

        let wx = Weather::from_str("-SHRASN").unwrap();
        assert!(wx.phenomena.iter().all(|p| p.is_precipitation()));
        assert_eq!(wx.to_string(), "light rain and snow showers");
    }
    #[test]
    fn malformed_weather() {
        assert_eq!(Weather::from_str("-"), Err(Error::NoPhenomenon));
        assert_eq!(Weather::from_str(""), Err(Error::NoPhenomenon));
        for group in ["RMK", "CLR", "KSAN", "A3006", "-XX", "RAX", "AO2"] {
            assert_eq!(
                Weather::from_str(group),
                Err(Error::Malformed),
                "\"{}\" should not be a weather group",
                group
            );
        }
    }
}
