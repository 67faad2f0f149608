//! Degrees-minutes-seconds ↔ decimal-degrees conversion.
//!
//! The sign lives on the degrees component.  Because `-0` is not
//! representable as an integer, [`Dms`] also keeps an explicit `negative`
//! flag so that angles in `(-1°, 0°)` survive the round trip.

use std::fmt;

/// A sexagesimal angle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dms {
    /// Whole degrees, negative for southern / western angles of 1° or more.
    pub degrees:  i32,
    /// Whole minutes, `0..60`.
    pub minutes:  u32,
    /// Seconds, `[0, 60)`.
    pub seconds:  f64,
    /// Set for every negative angle, including those with `degrees == 0`.
    pub negative: bool,
}

impl Dms {
    pub fn from_decimal(decimal_degrees: f64) -> Self {
        let negative = decimal_degrees < 0.0;
        let magnitude = decimal_degrees.abs();

        let whole = magnitude.trunc();
        let minutes_float = (magnitude - whole) * 60.0;
        let minutes = minutes_float.trunc();
        let seconds = (minutes_float - minutes) * 60.0;

        let degrees = whole as i32;
        Self {
            degrees: if negative { -degrees } else { degrees },
            minutes: minutes as u32,
            seconds,
            negative,
        }
    }

    pub fn to_decimal(self) -> f64 {
        let magnitude = f64::from(self.degrees.unsigned_abs())
            + f64::from(self.minutes) / 60.0
            + self.seconds / 3600.0;
        if self.negative || self.degrees < 0 { -magnitude } else { magnitude }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative || self.degrees < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{}°{:02}'{:06.3}\"",
            self.degrees.unsigned_abs(),
            self.minutes,
            self.seconds
        )
    }
}

/// Split decimal degrees into a [`Dms`].
#[inline]
pub fn decimal_to_dms(decimal_degrees: f64) -> Dms {
    Dms::from_decimal(decimal_degrees)
}

/// Combine degrees, minutes and seconds into decimal degrees.
///
/// The sign of `degrees` applies to the whole angle, so `(-10, 30, 0)` is
/// `-10.5`.  Use [`Dms::to_decimal`] for angles between `-1°` and `0°`.
pub fn dms_to_decimal(degrees: i32, minutes: u32, seconds: f64) -> f64 {
    Dms { degrees, minutes, seconds, negative: degrees < 0 }.to_decimal()
}
