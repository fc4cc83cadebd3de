//! Observation date & time.
//! METAR reports only carry the day of month and time of day (UTC),
//! month & year are resolved from a reference [Epoch].
use hifitime::Epoch;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Date/time group parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("expecting DDHHMMZ format")]
    FormatMismatch,
    #[error("day of month out of range")]
    InvalidDay,
    #[error("hour out of range")]
    InvalidHour,
    #[error("minute out of range")]
    InvalidMinute,
    #[error("day does not exist in resolved month")]
    Resolution,
}

/// `DDHHMMZ` group: day of month, hour and minute, in UTC
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayTime {
    /// Day of month (1..=31)
    pub day: u8,
    /// Hour of day (0..=23)
    pub hour: u8,
    /// Minute (0..=59)
    pub minute: u8,
}

impl std::str::FromStr for DayTime {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 7 || !s.ends_with('Z') || !s[..6].chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::FormatMismatch);
        }
        // ascii digits: slicing is safe
        let day = s[0..2].parse::<u8>().map_err(|_| Error::FormatMismatch)?;
        let hour = s[2..4].parse::<u8>().map_err(|_| Error::FormatMismatch)?;
        let minute = s[4..6].parse::<u8>().map_err(|_| Error::FormatMismatch)?;
        if !(1..=31).contains(&day) {
            return Err(Error::InvalidDay);
        }
        if hour > 23 {
            return Err(Error::InvalidHour);
        }
        if minute > 59 {
            return Err(Error::InvalidMinute);
        }
        Ok(Self { day, hour, minute })
    }
}

impl std::fmt::Display for DayTime {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:02}{:02}{:02}Z", self.day, self.hour, self.minute)
    }
}

impl DayTime {
    /// Builds the observation [Epoch] in given month & year
    pub fn in_month(&self, year: i32, month: u8) -> Result<Epoch, Error> {
        Epoch::maybe_from_gregorian_utc(year, month, self.day, self.hour, self.minute, 0, 0)
            .map_err(|_| Error::Resolution)
    }
    /// Builds the observation [Epoch] using the month & year of given
    /// reference. Reports are never issued in the future:
    /// when the day of month is past the reference day of month,
    /// the report belongs to the previous month.
    pub fn resolve(&self, reference: Epoch) -> Result<Epoch, Error> {
        let (mut year, mut month, day, _, _, _, _) = reference.to_gregorian_utc();
        if self.day > day {
            if month == 1 {
                month = 12;
                year -= 1;
            } else {
                month -= 1;
            }
        }
        self.in_month(year, month)
    }
}

/// Formats given [Epoch] as ISO-8601, with explicit UTC offset
pub fn iso8601(epoch: Epoch) -> String {
    let (y, m, d, hh, mm, ss, _) = epoch.to_gregorian_utc();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}+00:00",
        y, m, d, hh, mm, ss
    )
}
