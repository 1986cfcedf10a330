//! Unit-tagged lengths

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::number::decimal;

/// Unit attached to a [`Length`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// CSS pixels; SVG user units
    Px,
    Percent,
    /// Bare number
    Unitless,
    /// Seconds, for durations
    Seconds,
}

impl Unit {
    /// CSS suffix for this unit
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Unitless => "",
            Unit::Seconds => "s",
        }
    }
}

/// A finite magnitude with a unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    value: f64,
    unit: Unit,
}

impl Length {
    /// Build a length, rejecting NaN and infinities
    pub fn try_new(value: f64, unit: Unit) -> Result<Self, ValueError> {
        if value.is_finite() {
            Ok(Self { value, unit })
        } else {
            Err(ValueError::NonFinite(value))
        }
    }

    /// # Panics
    ///
    /// Panics if `value` is not finite.
    fn checked(value: f64, unit: Unit) -> Self {
        assert!(value.is_finite(), "length magnitude must be finite");
        Self { value, unit }
    }

    /// Pixel length
    ///
    /// # Panics
    ///
    /// Panics if `value` is not finite. Use [`Length::try_new`] for untrusted input.
    pub fn px(value: f64) -> Self {
        Self::checked(value, Unit::Px)
    }

    /// Percentage length
    ///
    /// # Panics
    ///
    /// Panics if `value` is not finite.
    pub fn percent(value: f64) -> Self {
        Self::checked(value, Unit::Percent)
    }

    /// Unitless number
    ///
    /// # Panics
    ///
    /// Panics if `value` is not finite.
    pub fn number(value: f64) -> Self {
        Self::checked(value, Unit::Unitless)
    }

    /// Duration in seconds
    ///
    /// # Panics
    ///
    /// Panics if `value` is not finite.
    pub fn seconds(value: f64) -> Self {
        Self::checked(value, Unit::Seconds)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Text for an SVG presentation attribute.
    ///
    /// Pixels are written as bare user units, so `Length::px(20.0)` gives `20`.
    pub fn to_attribute(&self) -> String {
        match self.unit {
            Unit::Px | Unit::Unitless => decimal(self.value),
            Unit::Percent | Unit::Seconds => self.to_string(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", decimal(self.value), self.unit.suffix())
    }
}

impl FromStr for Length {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (number, unit) = if let Some(n) = trimmed.strip_suffix("px") {
            (n, Unit::Px)
        } else if let Some(n) = trimmed.strip_suffix('%') {
            (n, Unit::Percent)
        } else if let Some(n) = trimmed.strip_suffix('s') {
            (n, Unit::Seconds)
        } else {
            // Bare numbers size icons, so they are read as pixels
            (trimmed, Unit::Px)
        };

        let value: f64 = number
            .trim_end()
            .parse()
            .map_err(|_| ValueError::InvalidLength(s.to_string()))?;
        Length::try_new(value, unit).map_err(|_| ValueError::InvalidLength(s.to_string()))
    }
}
