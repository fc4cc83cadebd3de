//! Report types & modifiers
use strum_macros::EnumString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Describes all known report types
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportType {
    /// Routine report, issued on schedule
    #[strum(serialize = "METAR")]
    Metar,
    /// Special report, issued on significant change
    #[strum(serialize = "SPECI")]
    Speci,
    /// Report did not specify its type
    #[default]
    #[strum(disabled)]
    Unknown,
}

impl ReportType {
    /// Returns report type code, None when unknown
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Metar => Some("METAR"),
            Self::Speci => Some("SPECI"),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.code().unwrap_or("unknown").fmt(f)
    }
}

/// Report modifiers, following the date/time group
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Modifier {
    /// Fully automated report
    #[strum(serialize = "AUTO")]
    Auto,
    /// Correction of a previously issued report
    #[strum(serialize = "COR", serialize = "CCA", serialize = "CCB", serialize = "CCC")]
    Corrected,
    /// Missing report
    #[strum(serialize = "NIL")]
    Nil,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn report_types() {
        assert_eq!(ReportType::from_str("METAR"), Ok(ReportType::Metar));
        assert_eq!(ReportType::from_str("SPECI"), Ok(ReportType::Speci));
        assert!(ReportType::from_str("Unknown").is_err());
        assert!(ReportType::from_str("TAF").is_err());
        assert_eq!(ReportType::default().code(), None);
        assert_eq!(ReportType::Speci.to_string(), "SPECI");
    }
    #[test]
    fn modifiers() {
        assert_eq!(Modifier::from_str("AUTO"), Ok(Modifier::Auto));
        assert_eq!(Modifier::from_str("COR"), Ok(Modifier::Corrected));
        assert_eq!(Modifier::from_str("CCA"), Ok(Modifier::Corrected));
        assert_eq!(Modifier::from_str("NIL"), Ok(Modifier::Nil));
        assert!(Modifier::from_str("RMK").is_err());
    }
}
