//! METAR report decoder.
//!
//! The report is split into whitespace separated groups, which are consumed
//! left to right against an ordered grammar. The header (optional report type,
//! station identifier, date/time group) is mandatory. Each body group is then
//! tested against the remaining [Stage]s, in report order: a group that does not
//! match any remaining stage is skipped. Everything after `RMK` is remarks.
use crate::{
    epoch::DayTime,
    error::ParsingError,
    pressure::parse_altimeter,
    remarks::Remarks,
    sky::SkyCondition,
    station::StationId,
    temperature::Temperatures,
    types::{Modifier, ReportType},
    units::Pressure,
    visibility::Visibility,
    weather::Weather,
    wind::{Wind, WindSector},
    Observation,
};

use hifitime::Epoch;
use regex::Regex;
use std::str::FromStr;

#[cfg(feature = "log")]
use log::{debug, error};

lazy_static! {
    /// Runway visual range: recognized, not decoded
    static ref RUNWAY_RANGE: Regex =
        Regex::new(r"^R\d{2}[LRC]?/[PM]?\d{4}(?:V[PM]?\d{4})?(?:FT)?/?[UDN]?$").unwrap();
    /// Whole part of a statute miles visibility ("1" in "1 1/2SM")
    static ref WHOLE_MILES: Regex = Regex::new(r"^\d{1,2}$").unwrap();
    /// Fractional statute miles visibility
    static ref FRACTION_MILES: Regex = Regex::new(r"^\d/\d{1,2}SM$").unwrap();
}

/// Remarks section marker
const REMARKS_MARKER: &str = "RMK";

/// Trend forecast markers, ending the body of the report
const TREND_MARKERS: [&str; 3] = ["NOSIG", "TEMPO", "BECMG"];

/// Body grammar, in report order
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Stage {
    Modifier,
    Wind,
    WindSector,
    Visibility,
    RunwayRange,
    Weather,
    Sky,
    Temperatures,
    Altimeter,
}

impl Stage {
    const ALL: [Stage; 9] = [
        Stage::Modifier,
        Stage::Wind,
        Stage::WindSector,
        Stage::Visibility,
        Stage::RunwayRange,
        Stage::Weather,
        Stage::Sky,
        Stage::Temperatures,
        Stage::Altimeter,
    ];
    /// Stages that may appear several times in a row
    fn is_repeatable(&self) -> bool {
        matches!(
            self,
            Self::Modifier
                | Self::Visibility
                | Self::RunwayRange
                | Self::Weather
                | Self::Sky
                | Self::Altimeter
        )
    }
}

/// Report body, while being decoded
#[derive(Debug, Default)]
struct Body {
    modifiers: Vec<Modifier>,
    wind: Option<Wind>,
    visibility: Option<Visibility>,
    weather: Vec<Weather>,
    sky: Vec<SkyCondition>,
    temperatures: Option<Temperatures>,
    altimeter: Option<Pressure>,
}

impl Body {
    /// Tries to consume given group at given stage.
    /// Returns true when the group was consumed.
    fn consume(&mut self, stage: Stage, group: &str) -> bool {
        match stage {
            Stage::Modifier => match Modifier::from_str(group) {
                Ok(modifier) => {
                    self.modifiers.push(modifier);
                    true
                },
                Err(_) => false,
            },
            Stage::Wind => match Wind::from_str(group) {
                Ok(wind) => {
                    self.wind = Some(wind);
                    true
                },
                Err(_) => false,
            },
            Stage::WindSector => match (self.wind.as_mut(), WindSector::from_str(group)) {
                (Some(wind), Ok(sector)) => {
                    wind.variable_sector = Some(sector);
                    true
                },
                _ => false,
            },
            Stage::Visibility => match Visibility::from_str(group) {
                Ok(visibility) => {
                    // prevailing visibility comes first, then directional minimums
                    self.visibility.get_or_insert(visibility);
                    true
                },
                Err(_) => false,
            },
            Stage::RunwayRange => RUNWAY_RANGE.is_match(group),
            Stage::Weather => match Weather::from_str(group) {
                Ok(weather) => {
                    self.weather.push(weather);
                    true
                },
                Err(_) => false,
            },
            Stage::Sky => match SkyCondition::from_str(group) {
                Ok(sky) => {
                    self.sky.push(sky);
                    true
                },
                Err(_) => false,
            },
            Stage::Temperatures => match Temperatures::from_str(group) {
                Ok(temperatures) => {
                    self.temperatures = Some(temperatures);
                    true
                },
                Err(_) => false,
            },
            Stage::Altimeter => match parse_altimeter(group) {
                Ok(altimeter) => {
                    // first setting prevails, when both A and Q are reported
                    self.altimeter.get_or_insert(altimeter);
                    true
                },
                Err(_) => false,
            },
        }
    }
}

/// Splits a report into groups.
/// Whole and fractional statute miles visibility ("1 1/2SM") form a single group,
/// the end of message marker ('=') is dropped.
pub(crate) fn tokenize(report: &str) -> Vec<String> {
    let mut groups = Vec::<String>::new();
    let mut items = report
        .split_ascii_whitespace()
        .map(|item| item.trim_end_matches('='))
        .filter(|item| !item.is_empty())
        .peekable();
    while let Some(item) = items.next() {
        if WHOLE_MILES.is_match(item) {
            if let Some(next) = items.peek() {
                if FRACTION_MILES.is_match(next) {
                    groups.push(format!("{} {}", item, next));
                    let _ = items.next();
                    continue;
                }
            }
        }
        groups.push(item.to_string());
    }
    groups
}

/// Month & year context of the observation
#[derive(Debug, Copy, Clone, PartialEq, Default)]
enum Reference {
    /// Current system time
    #[default]
    Now,
    /// Given reference date, may roll back to previous month
    Epoch(Epoch),
    /// Given month & year
    MonthYear { year: i32, month: u8 },
}

/// [Decoder] converts METAR reports to [Observation]s.
/// Decoding is pure and a [Decoder] may be shared between threads.
/// ```
/// use metar::prelude::*;
///
/// let reference = Epoch::from_gregorian_utc_at_midnight(2026, 10, 17);
/// let decoder = Decoder::default().with_reference(reference);
///
/// let observation = decoder
///     .decode("KSAN 101651Z 21005KT 10SM CLR 21/13 A3006 RMK AO2 SLP177 T02110128")
///     .unwrap();
///
/// assert_eq!(observation.station_id.as_str(), "KSAN");
/// assert_eq!(observation.wind_direction(), Some(210));
/// assert_eq!(
///     observation.epoch,
///     Epoch::from_gregorian_utc_hms(2026, 10, 10, 16, 51, 0)
/// );
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Decoder {
    reference: Reference,
    strict: bool,
}

impl Decoder {
    /// Resolves month & year from given reference [Epoch].
    /// A report day of month past the reference day of month
    /// is resolved in the previous month.
    pub fn with_reference(&self, reference: Epoch) -> Self {
        let mut s = *self;
        s.reference = Reference::Epoch(reference);
        s
    }
    /// Reports are issued in given month & year
    pub fn with_month_year(&self, year: i32, month: u8) -> Self {
        let mut s = *self;
        s.reference = Reference::MonthYear { year, month };
        s
    }
    /// In strict mode, unrecognized body groups are reported
    /// as [ParsingError::UnparsedGroups] instead of being skipped.
    pub fn strict(&self, strict: bool) -> Self {
        let mut s = *self;
        s.strict = strict;
        s
    }

    fn resolve(&self, day_time: &DayTime) -> Result<Epoch, ParsingError> {
        let resolved = match self.reference {
            Reference::Now => {
                let now = Epoch::now().map_err(|_| ParsingError::SystemTime)?;
                day_time.resolve(now)
            },
            Reference::Epoch(reference) => day_time.resolve(reference),
            Reference::MonthYear { year, month } => day_time.in_month(year, month),
        };
        resolved.map_err(|_| ParsingError::DateResolution)
    }

    /// Decodes given METAR report.
    /// Fails when the station identifier or the date/time group
    /// is missing or malformed. Any other unrecognized group is skipped,
    /// unless [Decoder::strict].
    pub fn decode(&self, report: &str) -> Result<Observation, ParsingError> {
        let groups = tokenize(report);
        let mut groups = groups.iter().map(|g| g.as_str()).peekable();

        if groups.peek().is_none() {
            return Err(ParsingError::EmptyReport);
        }

        let report_type = match groups.peek().map(|g| ReportType::from_str(g)) {
            Some(Ok(report_type)) => {
                let _ = groups.next();
                report_type
            },
            _ => ReportType::Unknown,
        };

        let station = groups.next().ok_or(ParsingError::MissingStation)?;
        let station_id = StationId::from_str(station).map_err(|_e| {
            #[cfg(feature = "log")]
            error!("invalid station \"{}\": {}", station, _e);
            ParsingError::InvalidStation(station.to_string())
        })?;

        let day_time = groups.next().ok_or(ParsingError::MissingTime)?;
        let day_time = DayTime::from_str(day_time).map_err(|_e| {
            #[cfg(feature = "log")]
            error!("invalid date/time group \"{}\": {}", day_time, _e);
            ParsingError::InvalidTime(day_time.to_string())
        })?;
        let epoch = self.resolve(&day_time)?;

        let mut body = Body::default();
        let mut unparsed = Vec::<String>::new();
        let mut trend = Vec::<&str>::new();
        let mut remarks: Option<Remarks> = None;
        let mut stage = 0;

        while let Some(group) = groups.next() {
            if group == REMARKS_MARKER {
                remarks = Some(Remarks::decode(groups.by_ref()));
                break;
            }
            if !trend.is_empty() || TREND_MARKERS.contains(&group) {
                trend.push(group);
                continue;
            }
            let consumed = (stage..Stage::ALL.len()).find(|&i| body.consume(Stage::ALL[i], group));
            match consumed {
                Some(i) => {
                    stage = if Stage::ALL[i].is_repeatable() {
                        i
                    } else {
                        i + 1
                    };
                },
                None => {
                    #[cfg(feature = "log")]
                    debug!("{}: skipping unrecognized group \"{}\"", station_id, group);
                    unparsed.push(group.to_string());
                },
            }
        }

        if self.strict && !unparsed.is_empty() {
            return Err(ParsingError::UnparsedGroups(unparsed));
        }

        let temperatures = body.temperatures.unwrap_or_default();
        let refined = remarks.as_ref();

        Ok(Observation {
            station_id,
            report_type,
            day_time,
            epoch,
            modifiers: body.modifiers,
            wind: body.wind,
            visibility: body.visibility,
            weather: body.weather,
            sky: body.sky,
            temperature: refined
                .and_then(|rmk| rmk.temperature)
                .or(temperatures.temperature),
            dewpoint: refined
                .and_then(|rmk| rmk.dewpoint)
                .or(temperatures.dewpoint),
            altimeter: body.altimeter,
            sea_level_pressure: refined.and_then(|rmk| rmk.sea_level_pressure),
            trend: if trend.is_empty() {
                None
            } else {
                Some(trend.join(" "))
            },
            remarks,
            unparsed,
        })
    }
}
