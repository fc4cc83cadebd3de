//! Flat projection of an [Observation], ready to be published
//! (for example as JSON, with the `serde` feature).
use crate::{epoch::iso8601, sky::SkyCondition, weather::Weather, Observation};
use itertools::Itertools;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Renders a sky condition sequence, like "a few clouds at 2500 feet; overcast at 8000 feet".
/// No sky condition renders as an empty string, unlike a clear sky.
pub fn format_sky(sky: &[SkyCondition]) -> String {
    sky.iter().map(|layer| layer.to_string()).join("; ")
}

/// Renders a present weather sequence, like "light rain; mist".
pub fn format_weather(weather: &[Weather]) -> String {
    weather.iter().map(|wx| wx.to_string()).join("; ")
}

/// [Summary] is a flat projection of an [Observation].
/// Fields that were not reported are None (null), never defaulted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    /// Caller assigned identifier
    pub id: u64,
    /// Observation time, ISO-8601 with UTC offset
    pub time: String,
    pub station_id: String,
    /// Temperature in °C, refined by remarks when possible
    pub temperature: Option<f64>,
    /// Dew point in °C, refined by remarks when possible
    pub dewpoint: Option<f64>,
    /// Wind direction in degrees, None when variable
    pub wind_dir: Option<u16>,
    pub wind_gust: Option<f64>,
    pub wind_speed: Option<f64>,
    /// Altimeter setting, in its reported unit
    pub altimeter: Option<f64>,
    /// "METAR" or "SPECI"
    pub ob_type: Option<String>,
    /// Prevailing visibility, in its reported unit
    pub visibility: Option<f64>,
    pub clouds: String,
    pub sig_weather: String,
    /// Sea level pressure in hPa
    pub sea_level_pressure: Option<f64>,
    /// Raw remarks
    pub remarks: Option<String>,
}

impl Summary {
    /// Builds a [Summary] of given [Observation]
    pub fn new(id: u64, observation: &Observation) -> Self {
        Self {
            id,
            time: iso8601(observation.epoch),
            station_id: observation.station_id.to_string(),
            temperature: observation.temperature.map(|t| t.value),
            dewpoint: observation.dewpoint.map(|t| t.value),
            wind_dir: observation.wind_direction(),
            wind_gust: observation.wind_gust().map(|s| s.value),
            wind_speed: observation.wind_speed().map(|s| s.value),
            altimeter: observation.altimeter.map(|p| p.value),
            ob_type: observation.report_type.code().map(|code| code.to_string()),
            visibility: observation.visibility.map(|v| v.distance().value),
            clouds: format_sky(&observation.sky),
            sig_weather: format_weather(&observation.weather),
            sea_level_pressure: observation.sea_level_pressure.map(|p| p.value),
            remarks: observation.remarks.as_ref().map(|rmk| rmk.text.clone()),
        }
    }
}

impl From<&Observation> for Summary {
    fn from(observation: &Observation) -> Self {
        Self::new(0, observation)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn sky_rendering() {
        assert_eq!(format_sky(&[]), "");
        let clear = [SkyCondition::from_str("CLR").unwrap()];
        assert_eq!(format_sky(&clear), "clear");
        let layers = [
            SkyCondition::from_str("FEW025").unwrap(),
            SkyCondition::from_str("OVC080").unwrap(),
        ];
        assert_eq!(
            format_sky(&layers),
            "a few clouds at 2500 feet; overcast at 8000 feet"
        );
    }
    #[test]
    fn weather_rendering() {
        assert_eq!(format_weather(&[]), "");
        let weather = [
            Weather::from_str("-RA").unwrap(),
            Weather::from_str("BR").unwrap(),
        ];
        assert_eq!(format_weather(&weather), "light rain; mist");
    }
}
