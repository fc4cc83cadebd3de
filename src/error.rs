use thiserror::Error;

/// Errors that may rise when decoding a METAR report.
/// Only the report header (station + date/time group) is mandatory,
/// any other group that we fail to interprate is simply skipped,
/// unless the [crate::Decoder] is strict.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParsingError {
    /// Report does not contain a single group
    #[error("empty report")]
    EmptyReport,
    /// Report ends before the station identifier
    #[error("missing station identifier")]
    MissingStation,
    /// Station identifier is not a 4 character ICAO code
    #[error("invalid station identifier \"{0}\"")]
    InvalidStation(String),
    /// Report ends before the date/time group
    #[error("missing date/time group")]
    MissingTime,
    /// Date/time group does not follow the DDHHMMZ format
    #[error("invalid date/time group \"{0}\"")]
    InvalidTime(String),
    /// Day of month does not exist in the resolved month
    #[error("failed to resolve observation date")]
    DateResolution,
    /// No reference date was given and system time is not available
    #[error("failed to determine current date")]
    SystemTime,
    /// Strict decoding: these groups were not recognized
    #[error("unparsed groups: {}", .0.join(" "))]
    UnparsedGroups(Vec<String>),
}
