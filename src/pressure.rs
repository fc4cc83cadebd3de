//! Altimeter setting group
use crate::units::{Pressure, PressureUnit};
use std::str::FromStr;
use thiserror::Error;

/// Altimeter group parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("malformed altimeter group")]
    Malformed,
    #[error("unknown altimeter unit")]
    UnknownUnit,
}

/// Parses `Ahhhh` (inHg, two implied decimals)
/// or `Qpppp` (hPa) altimeter setting
pub fn parse_altimeter(s: &str) -> Result<Pressure, Error> {
    if s.len() != 5 || !s.is_char_boundary(1) {
        return Err(Error::Malformed);
    }
    let (prefix, digits) = s.split_at(1);
    let unit = PressureUnit::from_str(prefix).map_err(|_| Error::UnknownUnit)?;
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::Malformed);
    }
    let value = digits.parse::<f64>().map_err(|_| Error::Malformed)?;
    match unit {
        PressureUnit::InchesOfMercury => Ok(Pressure::inhg(value / 100.0)),
        PressureUnit::Hectopascals => Ok(Pressure::hpa(value)),
    }
}
