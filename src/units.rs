//! Physical quantities found in METAR reports.
//! Every quantity carries the unit it was reported in,
//! conversions are pure functions.
use strum_macros::EnumString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 1 inch of mercury, in hectopascals
pub const HPA_PER_INHG: f64 = 33.863_886_666_67;

/// 1 statute mile, in meters
pub const METERS_PER_STATUTE_MILE: f64 = 1_609.344;

/// 1 foot, in meters
pub const METERS_PER_FOOT: f64 = 0.3048;

/// 1 inch, in meters
pub const METERS_PER_INCH: f64 = 0.0254;

/// 1 knot, in meters per second
pub const MPS_PER_KNOT: f64 = 1_852.0 / 3_600.0;

/// 1 mile per hour, in meters per second
pub const MPS_PER_MPH: f64 = METERS_PER_STATUTE_MILE / 3_600.0;

/// Converts inches of mercury to hectopascals
pub fn inhg_to_hpa(inhg: f64) -> f64 {
    inhg * HPA_PER_INHG
}

/// Converts hectopascals to inches of mercury
pub fn hpa_to_inhg(hpa: f64) -> f64 {
    hpa / HPA_PER_INHG
}

/// Converts statute miles to meters
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_STATUTE_MILE
}

/// Converts meters to statute miles
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_STATUTE_MILE
}

/// Converts degrees Celsius to degrees Fahrenheit
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Converts degrees Fahrenheit to degrees Celsius
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Speed units, as encoded in the wind group suffix
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedUnit {
    /// Knots
    #[default]
    #[strum(serialize = "KT")]
    Knots,
    /// Meters per second
    #[strum(serialize = "MPS")]
    MetersPerSecond,
    /// Kilometers per hour
    #[strum(serialize = "KMH")]
    KilometersPerHour,
    /// Miles per hour (never encoded, conversions only)
    #[strum(serialize = "MPH")]
    MilesPerHour,
}

impl SpeedUnit {
    /// Size of this unit, in meters per second
    fn mps(&self) -> f64 {
        match self {
            Self::Knots => MPS_PER_KNOT,
            Self::MetersPerSecond => 1.0,
            Self::KilometersPerHour => 1.0 / 3.6,
            Self::MilesPerHour => MPS_PER_MPH,
        }
    }
}

impl std::fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Knots => "knots".fmt(f),
            Self::MetersPerSecond => "m/s".fmt(f),
            Self::KilometersPerHour => "km/h".fmt(f),
            Self::MilesPerHour => "mph".fmt(f),
        }
    }
}

/// Speed measurement
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Speed {
    pub value: f64,
    pub unit: SpeedUnit,
}

impl Speed {
    pub fn new(value: f64, unit: SpeedUnit) -> Self {
        Self { value, unit }
    }
    /// Knots
    pub fn knots(value: f64) -> Self {
        Self::new(value, SpeedUnit::Knots)
    }
    /// Converts self to desired unit
    pub fn to(&self, unit: SpeedUnit) -> Self {
        if self.unit == unit {
            return *self;
        }
        Self::new(self.value * self.unit.mps() / unit.mps(), unit)
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Distance units
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceUnit {
    /// Statute miles
    #[default]
    #[strum(serialize = "SM")]
    StatuteMiles,
    /// Meters
    #[strum(serialize = "M")]
    Meters,
    /// Kilometers
    #[strum(serialize = "KM")]
    Kilometers,
    /// Feet, used for cloud heights
    #[strum(serialize = "FT")]
    Feet,
    /// Inches, used for precipitation amounts
    #[strum(serialize = "IN")]
    Inches,
}

impl DistanceUnit {
    /// Size of this unit, in meters
    fn meters(&self) -> f64 {
        match self {
            Self::StatuteMiles => METERS_PER_STATUTE_MILE,
            Self::Meters => 1.0,
            Self::Kilometers => 1_000.0,
            Self::Feet => METERS_PER_FOOT,
            Self::Inches => METERS_PER_INCH,
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::StatuteMiles => "miles".fmt(f),
            Self::Meters => "meters".fmt(f),
            Self::Kilometers => "km".fmt(f),
            Self::Feet => "feet".fmt(f),
            Self::Inches => "inches".fmt(f),
        }
    }
}

/// Distance measurement
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }
    /// Statute miles
    pub fn miles(value: f64) -> Self {
        Self::new(value, DistanceUnit::StatuteMiles)
    }
    /// Meters
    pub fn meters(value: f64) -> Self {
        Self::new(value, DistanceUnit::Meters)
    }
    /// Feet
    pub fn feet(value: f64) -> Self {
        Self::new(value, DistanceUnit::Feet)
    }
    /// Converts self to desired unit
    pub fn to(&self, unit: DistanceUnit) -> Self {
        if self.unit == unit {
            return *self;
        }
        Self::new(self.value * self.unit.meters() / unit.meters(), unit)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Pressure units, as encoded by the altimeter group prefix
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, EnumString)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureUnit {
    /// Inches of mercury
    #[default]
    #[strum(serialize = "A")]
    InchesOfMercury,
    /// Hectopascals (millibars)
    #[strum(serialize = "Q")]
    Hectopascals,
}

impl std::fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InchesOfMercury => "inHg".fmt(f),
            Self::Hectopascals => "hPa".fmt(f),
        }
    }
}

/// Pressure measurement
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pressure {
    pub value: f64,
    pub unit: PressureUnit,
}

impl Pressure {
    pub fn new(value: f64, unit: PressureUnit) -> Self {
        Self { value, unit }
    }
    /// Inches of mercury
    pub fn inhg(value: f64) -> Self {
        Self::new(value, PressureUnit::InchesOfMercury)
    }
    /// Hectopascals
    pub fn hpa(value: f64) -> Self {
        Self::new(value, PressureUnit::Hectopascals)
    }
    /// Converts self to desired unit
    pub fn to(&self, unit: PressureUnit) -> Self {
        match (self.unit, unit) {
            (PressureUnit::InchesOfMercury, PressureUnit::Hectopascals) => {
                Self::hpa(inhg_to_hpa(self.value))
            },
            (PressureUnit::Hectopascals, PressureUnit::InchesOfMercury) => {
                Self::inhg(hpa_to_inhg(self.value))
            },
            _ => *self,
        }
    }
}

impl std::fmt::Display for Pressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Temperature units
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    /// Degrees Celsius, the only unit encoded in METAR reports
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Celsius => "C".fmt(f),
            Self::Fahrenheit => "F".fmt(f),
        }
    }
}

/// Temperature measurement
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperature {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl Temperature {
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }
    /// Degrees Celsius
    pub fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }
    /// Converts self to desired unit
    pub fn to(&self, unit: TemperatureUnit) -> Self {
        match (self.unit, unit) {
            (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => {
                Self::new(celsius_to_fahrenheit(self.value), unit)
            },
            (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
                Self::new(fahrenheit_to_celsius(self.value), unit)
            },
            _ => *self,
        }
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.1} {}", self.value, self.unit)
    }
}
