#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * METAR is part of the rtk-rs framework.
 * Authors: Guillaume W. Bres <guillaume.bressaix@gmail.com> et al.
 * This framework is shipped under Mozilla Public V2 license.
 */

#[macro_use]
extern crate lazy_static;

pub mod decoder;
pub mod epoch;
pub mod pressure;
pub mod remarks;
pub mod sky;
pub mod station;
pub mod summary;
pub mod temperature;
pub mod types;
pub mod units;
pub mod visibility;
pub mod weather;
pub mod wind;

mod error;

#[cfg(test)]
mod tests;

use std::str::FromStr;

use hifitime::Epoch;

use epoch::DayTime;
use remarks::Remarks;
use sky::SkyCondition;
use station::StationId;
use types::{Modifier, ReportType};
use units::{Pressure, Speed, Temperature};
use visibility::Visibility;
use weather::Weather;
use wind::Wind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Package to include all basic structures
pub mod prelude {
    pub use crate::{
        decoder::Decoder,
        epoch::DayTime,
        error::ParsingError,
        remarks::{Remarks, StationType},
        sky::{CloudType, Coverage, SkyCondition},
        station::StationId,
        summary::{format_sky, format_weather, Summary},
        types::{Modifier, ReportType},
        units::{
            Distance, DistanceUnit, Pressure, PressureUnit, Speed, SpeedUnit, Temperature,
            TemperatureUnit,
        },
        visibility::Visibility,
        weather::{Descriptor, Intensity, Phenomenon, Weather},
        wind::{Wind, WindDirection, WindSector},
        decode, Observation,
    };
    // pub re-export
    pub use hifitime::Epoch;
}

pub use decoder::Decoder;
pub use error::ParsingError;

/// Decodes given METAR report, in the current month & year.
/// Use a [Decoder] to specify the month & year context.
pub fn decode(report: &str) -> Result<Observation, ParsingError> {
    Decoder::default().decode(report)
}

/// [Observation] is a decoded METAR report.
/// It is built once, in a single pass, by the [Decoder].
/// Groups that were not reported are None (or empty sequences).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observation {
    /// ICAO station identifier
    pub station_id: StationId,
    /// Report type, Unknown when not specified
    pub report_type: ReportType,
    /// Date/time group, as reported
    pub day_time: DayTime,
    /// Observation [Epoch], resolved in the month & year context
    pub epoch: Epoch,
    /// Report modifiers (AUTO, COR..)
    pub modifiers: Vec<Modifier>,
    pub wind: Option<Wind>,
    pub visibility: Option<Visibility>,
    /// Present weather, in report order
    pub weather: Vec<Weather>,
    /// Sky conditions, in report order.
    /// Empty means not reported, which differs from a clear sky.
    pub sky: Vec<SkyCondition>,
    /// Temperature, refined by remarks (tenths of °C) when possible
    pub temperature: Option<Temperature>,
    /// Dew point, refined by remarks (tenths of °C) when possible
    pub dewpoint: Option<Temperature>,
    /// Altimeter setting, in its reported unit
    pub altimeter: Option<Pressure>,
    /// Sea level pressure, from remarks
    pub sea_level_pressure: Option<Pressure>,
    /// Trend forecast (NOSIG, TEMPO.., BECMG..), not decoded
    pub trend: Option<String>,
    /// Remarks section, when present
    pub remarks: Option<Remarks>,
    /// Body groups that were not recognized and skipped
    pub unparsed: Vec<String>,
}

impl Observation {
    /// Returns wind direction in degrees, None when variable or not reported
    pub fn wind_direction(&self) -> Option<u16> {
        self.wind
            .and_then(|wind| wind.direction)
            .and_then(|dir| dir.degrees())
    }
    /// Returns mean wind speed
    pub fn wind_speed(&self) -> Option<Speed> {
        self.wind.and_then(|wind| wind.speed)
    }
    /// Returns wind gust speed
    pub fn wind_gust(&self) -> Option<Speed> {
        self.wind.and_then(|wind| wind.gust)
    }
    /// Returns the lowest broken, overcast or vertical visibility layer
    pub fn ceiling(&self) -> Option<&SkyCondition> {
        self.sky
            .iter()
            .find(|layer| layer.coverage.is_ceiling() && layer.height.is_some())
    }
    /// Returns true if the report was generated by an automated station
    pub fn is_automated(&self) -> bool {
        self.modifiers.contains(&Modifier::Auto)
            || self
                .remarks
                .as_ref()
                .map(|rmk| rmk.station_type.is_some())
                .unwrap_or(false)
    }
}

impl FromStr for Observation {
    type Err = ParsingError;
    /// Decodes a METAR report in the current month & year
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
