//! Calendar dates as the photos API spells them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::RoverError;

/// An Earth calendar day, the primary query key of the photos API.
///
/// On the wire this is `"<year>-<month>-<day>"` with no zero padding
/// (`2016-3-5`). Parsing is more lenient and accepts padded components too,
/// so a padded input does not survive a round trip byte-for-byte.
/// Converting from a timestamp drops the time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EarthDate(NaiveDate);

impl EarthDate {
    /// Builds a date from its parts, rejecting days that do not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RoverError::InvalidDate`] for an impossible combination such as month 13.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, RoverError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                RoverError::InvalidDate(format!("{year}-{month}-{day} is not a calendar day"))
            })
    }

    /// The current date in the local time zone.
    pub fn today() -> Self {
        Local::now().into()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The underlying `chrono` date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for EarthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year(), self.month(), self.day())
    }
}

impl FromStr for EarthDate {
    type Err = RoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() < 3 {
            return Err(RoverError::InvalidDate(format!(
                "expecting at least 3 values separated by -, got {s:?}"
            )));
        }

        // Trailing components are ignored, but they still have to be numbers.
        let mut values = Vec::with_capacity(parts.len());
        for part in &parts {
            let v: i32 = part
                .parse()
                .map_err(|e| RoverError::InvalidDate(format!("{part:?} in {s:?}: {e}")))?;
            values.push(v);
        }

        let month = u32::try_from(values[1])
            .map_err(|_| RoverError::InvalidDate(format!("negative month in {s:?}")))?;
        let day = u32::try_from(values[2])
            .map_err(|_| RoverError::InvalidDate(format!("negative day in {s:?}")))?;
        Self::from_ymd(values[0], month, day)
    }
}

impl From<NaiveDate> for EarthDate {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for EarthDate {
    fn from(t: DateTime<Tz>) -> Self {
        Self(t.date_naive())
    }
}

impl Serialize for EarthDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EarthDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
