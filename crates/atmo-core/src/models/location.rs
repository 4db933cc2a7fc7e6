// ABOUTME: Validated coordinate and year-agnostic calendar-day types
// ABOUTME: All range checks happen at construction, before any fetch is attempted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 AtmoSphere Contributors

//! Location and calendar-day request types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

/// Reference year used to validate (month, day) pairs.
///
/// Climatology is year-agnostic by design; 2000 is a leap year, so Feb 29
/// is accepted as a valid calendar day.
const LEAP_REFERENCE_YEAR: i32 = 2000;

/// A validated geographic coordinate.
///
/// Latitude is constrained to [-90, 90] and longitude to [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both components.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when either component is
    /// non-finite or outside its legal range.
    pub fn new(lat: f64, lon: f64) -> EngineResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(EngineError::invalid_input(
                "latitude",
                format!("{lat} is outside [-90, 90]"),
            ));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(EngineError::invalid_input(
                "longitude",
                format!("{lon} is outside [-180, 180]"),
            ));
        }
        Ok(Self { lat, lon })
    }
}

/// A validated year-independent calendar day.
///
/// The year component of any request is ignored by design; validation runs
/// against a leap reference year so Feb 29 is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Month in [1, 12]
    pub month: u32,
    /// Day of month, valid for that month
    pub day: u32,
}

impl CalendarDay {
    /// Create a calendar day, validating month and day-of-month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when the month is outside
    /// [1, 12] or the day does not exist in that month.
    pub fn new(month: u32, day: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::invalid_input(
                "month",
                format!("{month} is outside [1, 12]"),
            ));
        }
        if NaiveDate::from_ymd_opt(LEAP_REFERENCE_YEAR, month, day).is_none() {
            return Err(EngineError::invalid_input(
                "day",
                format!("{day} is not a valid day for month {month}"),
            ));
        }
        Ok(Self { month, day })
    }

    /// Upper-case three-letter month key ("JAN" .. "DEC"), the keying scheme
    /// used by the NASA POWER climatology API.
    #[must_use]
    pub const fn month_key(self) -> &'static str {
        match self.month {
            1 => "JAN",
            2 => "FEB",
            3 => "MAR",
            4 => "APR",
            5 => "MAY",
            6 => "JUN",
            7 => "JUL",
            8 => "AUG",
            9 => "SEP",
            10 => "OCT",
            11 => "NOV",
            _ => "DEC",
        }
    }
}
