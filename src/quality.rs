use crate::constants::{MAX_QUALITY, MIN_QUALITY};
use crate::error::{CompressionError, Result};
use std::fmt;
use std::str::FromStr;

/// A JPEG quality percentage that has already been range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Result<Self> {
        Self::from_i64(i64::from(value))
    }

    fn from_i64(value: i64) -> Result<Self> {
        if !(i64::from(MIN_QUALITY)..=i64::from(MAX_QUALITY)).contains(&value) {
            return Err(CompressionError::QualityOutOfRange(value));
        }
        // in range, so it fits a u8
        Ok(Self(value as u8))
    }

    /// Validates raw percentage input as typed by the user.
    ///
    /// Missing or blank input is rejected before anything else, then the
    /// text must be an integer, then it must lie in `MIN_QUALITY..=MAX_QUALITY`.
    ///
    /// # Example
    /// ```
    /// use folder_squeeze::Quality;
    ///
    /// assert_eq!(Quality::parse(Some(" 50 ")).unwrap().value(), 50);
    /// assert!(Quality::parse(Some("95")).is_err());
    /// assert!(Quality::parse(None).is_err());
    /// ```
    pub fn parse(input: Option<&str>) -> Result<Self> {
        let text = input.map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(CompressionError::QualityMissing);
        }

        let value: i64 = text
            .parse()
            .map_err(|_| CompressionError::QualityNotANumber(text.to_string()))?;
        Self::from_i64(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for Quality {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
