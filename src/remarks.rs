//! Remarks section (everything following `RMK`).
//! The raw text is always preserved, a fixed vocabulary is decoded:
//!  - `AO1`/`AO2`: automated station type
//!  - `SLPppp`: sea level pressure
//!  - `TsTTTsDDD`: temperature & dew point in tenths of °C
//!  - `Prrrr`: hourly precipitation amount
//!  - `4sTTTsTTT`: 24 hour maximum & minimum temperatures
//!
//! Any other remark is station specific and left as is.
use crate::units::{Distance, DistanceUnit, Pressure, Temperature};
use regex::Regex;
use strum_macros::EnumString;

#[cfg(feature = "log")]
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref SEA_LEVEL_PRESSURE: Regex = Regex::new(r"^SLP(?P<p>\d{3})$").unwrap();
    static ref PRECISE_TEMPERATURES: Regex =
        Regex::new(r"^T(?P<ts>[01])(?P<t>\d{3})(?:(?P<ds>[01])(?P<d>\d{3}))?$").unwrap();
    static ref HOURLY_PRECIPITATION: Regex = Regex::new(r"^P(?P<p>\d{4})$").unwrap();
    static ref EXTREME_TEMPERATURES: Regex =
        Regex::new(r"^4(?P<xs>[01])(?P<x>\d{3})(?P<ns>[01])(?P<n>\d{3})$").unwrap();
}

/// Automated station type
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StationType {
    /// Automated station without precipitation discriminator
    #[strum(serialize = "AO1")]
    WithoutPrecipitationDiscriminator,
    /// Automated station with precipitation discriminator
    #[strum(serialize = "AO2")]
    WithPrecipitationDiscriminator,
}

/// Decoded remarks
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Remarks {
    /// Raw remarks text, groups separated by a single space
    pub text: String,
    pub station_type: Option<StationType>,
    /// Sea level pressure, in hPa
    pub sea_level_pressure: Option<Pressure>,
    /// Temperature, in tenths of °C
    pub temperature: Option<Temperature>,
    /// Dew point, in tenths of °C
    pub dewpoint: Option<Temperature>,
    /// Precipitation amount over the past hour
    pub hourly_precipitation: Option<Distance>,
    /// 24 hour maximum temperature
    pub max_temperature_24h: Option<Temperature>,
    /// 24 hour minimum temperature
    pub min_temperature_24h: Option<Temperature>,
}

/// Sea level pressure is reported as its last three digits, in tenths of hPa.
/// Values below 500 are in the 1000 hPa range, others in the 900 hPa range.
/// This is the conventional heuristic, not an exact inverse
/// of every real-world encoding.
pub fn sea_level_pressure(tenths: u16) -> Pressure {
    let tenths = if tenths < 500 {
        10_000 + tenths as u32
    } else {
        9_000 + tenths as u32
    };
    Pressure::hpa(tenths as f64 / 10.0)
}

/// Parses "sTTT": sign digit (1 for negative) and tenths of °C
fn tenths_celsius(sign: &str, tenths: &str) -> Option<Temperature> {
    let value = tenths.parse::<f64>().ok()? / 10.0;
    if sign == "1" {
        Some(Temperature::celsius(-value))
    } else {
        Some(Temperature::celsius(value))
    }
}

impl Remarks {
    /// Decodes remarks from the groups following `RMK`.
    /// Unknown groups are preserved in the raw text only.
    pub fn decode<'a, I: IntoIterator<Item = &'a str>>(groups: I) -> Self {
        let mut remarks = Self::default();
        let mut raw = Vec::<&str>::new();
        for group in groups {
            raw.push(group);
            remarks.decode_group(group);
        }
        remarks.text = raw.join(" ");
        remarks
    }

    fn decode_group(&mut self, group: &str) {
        if let Ok(station_type) = group.parse::<StationType>() {
            self.station_type = Some(station_type);
        } else if let Some(caps) = SEA_LEVEL_PRESSURE.captures(group) {
            if let Ok(tenths) = caps["p"].parse::<u16>() {
                self.sea_level_pressure = Some(sea_level_pressure(tenths));
            }
        } else if let Some(caps) = PRECISE_TEMPERATURES.captures(group) {
            self.temperature = tenths_celsius(&caps["ts"], &caps["t"]);
            if let (Some(sign), Some(tenths)) = (caps.name("ds"), caps.name("d")) {
                self.dewpoint = tenths_celsius(sign.as_str(), tenths.as_str());
            }
        } else if let Some(caps) = HOURLY_PRECIPITATION.captures(group) {
            if let Ok(hundredths) = caps["p"].parse::<f64>() {
                self.hourly_precipitation =
                    Some(Distance::new(hundredths / 100.0, DistanceUnit::Inches));
            }
        } else if let Some(caps) = EXTREME_TEMPERATURES.captures(group) {
            self.max_temperature_24h = tenths_celsius(&caps["xs"], &caps["x"]);
            self.min_temperature_24h = tenths_celsius(&caps["ns"], &caps["n"]);
        } else {
            // station specific (or SLPNO): raw text only
            return;
        }
        #[cfg(feature = "log")]
        debug!("remarks: decoded \"{}\"", group);
    }
}

impl std::str::FromStr for Remarks {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::decode(s.split_ascii_whitespace()))
    }
}

impl std::fmt::Display for Remarks {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.text.fmt(f)
    }
}
