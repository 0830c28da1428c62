//! Time-base conversion for protocol authoring.
//!
//! Raw `(value, unit)` pairs normalize to minutes, the unit every
//! protocol step stores its hold time in.

use embassy_time::Duration;

const TIMEBASE_NAME_SECOND: &str = "s";
const TIMEBASE_NAME_MINUTE: &str = "min";
const TIMEBASE_NAME_HOUR: &str = "hr";
const TIMEBASE_NAME_DAY: &str = "day";

/// Known time bases, each carrying its length in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum TimeBase {
    Second = 1,
    Minute = 60,
    Hour = 3_600,
    Day = 86_400,
}

impl TimeBase {
    /// Length of one unit in seconds.
    pub const fn seconds(self) -> u32 {
        self as u32
    }

    pub fn from_raw(value: u32) -> Option<Self> {
        Some(match value {
            1 => Self::Second,
            60 => Self::Minute,
            3_600 => Self::Hour,
            86_400 => Self::Day,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Second => TIMEBASE_NAME_SECOND,
            Self::Minute => TIMEBASE_NAME_MINUTE,
            Self::Hour => TIMEBASE_NAME_HOUR,
            Self::Day => TIMEBASE_NAME_DAY,
        }
    }
}

/// Normalize a raw duration to minutes.
///
/// Fractional results are fine: 30 seconds is 0.5 minutes.
#[allow(clippy::cast_precision_loss)]
pub fn to_minutes(value: f32, base: TimeBase) -> f32 {
    value * base.seconds() as f32 / 60.0
}

/// Convert a hold time in minutes to a wall-clock `Duration`.
///
/// Rounds to the nearest millisecond. Negative or non-finite inputs
/// collapse to a zero duration.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn minutes_to_duration(minutes: f32) -> Duration {
    let millis = libm::roundf(minutes * 60_000.0);
    if millis.is_finite() && millis > 0.0 {
        Duration::from_millis(millis as u64)
    } else {
        Duration::from_millis(0)
    }
}
