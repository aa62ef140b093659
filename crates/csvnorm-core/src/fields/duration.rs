use std::fmt;
use std::ops::Add;

use crate::errors::InvalidDataFormat;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Elapsed time held as a total count of milliseconds. Parsed from the
/// colon/dot form `H:MM:SS.mmm`, rendered as decimal seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elapsed {
    millis: u64,
}

impl Elapsed {
    /// All components are unsigned integers; minutes and seconds above 59
    /// are allowed, this is elapsed time rather than clock time. The
    /// millisecond segment may be omitted entirely (`H:MM:SS`), but a bare
    /// trailing dot or extra dot segments are rejected.
    pub fn parse(value: &str) -> Result<Self, InvalidDataFormat> {
        let invalid = || InvalidDataFormat::Duration {
            value: value.to_string(),
        };

        let mut colon_parts = value.split(':');
        let (hours, minutes, seconds_part) = match (
            colon_parts.next(),
            colon_parts.next(),
            colon_parts.next(),
            colon_parts.next(),
        ) {
            (Some(hours), Some(minutes), Some(seconds), None) => (hours, minutes, seconds),
            _ => return Err(invalid()),
        };

        let mut dot_parts = seconds_part.split('.');
        let (seconds, millis) = match (dot_parts.next(), dot_parts.next(), dot_parts.next()) {
            (Some(seconds), None, None) => (seconds, None),
            (Some(seconds), Some(millis), None) => (seconds, Some(millis)),
            _ => return Err(invalid()),
        };

        let hours = parse_component(hours).ok_or_else(invalid)?;
        let minutes = parse_component(minutes).ok_or_else(invalid)?;
        let seconds = parse_component(seconds).ok_or_else(invalid)?;
        let millis = match millis {
            Some(millis) => parse_component(millis).ok_or_else(invalid)?,
            None => 0,
        };

        let total = hours
            .checked_mul(MILLIS_PER_HOUR)
            .and_then(|acc| acc.checked_add(minutes.checked_mul(MILLIS_PER_MINUTE)?))
            .and_then(|acc| acc.checked_add(seconds.checked_mul(MILLIS_PER_SECOND)?))
            .and_then(|acc| acc.checked_add(millis))
            .ok_or_else(invalid)?;

        Ok(Self { millis: total })
    }

    pub fn total_millis(&self) -> u64 {
        self.millis
    }
}

/// Non-empty and digits only; `str::parse::<u64>` alone would admit a
/// leading `+`, which the format forbids.
fn parse_component(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl Add for Elapsed {
    type Output = Elapsed;

    fn add(self, rhs: Elapsed) -> Elapsed {
        Elapsed {
            millis: self.millis.saturating_add(rhs.millis),
        }
    }
}

impl fmt::Display for Elapsed {
    /// Decimal seconds: the fractional part is trimmed of trailing zeros and
    /// omitted when zero (`3723.5`, `10.75`, `60`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.millis / MILLIS_PER_SECOND;
        let millis = self.millis % MILLIS_PER_SECOND;
        if millis == 0 {
            write!(f, "{seconds}")
        } else {
            let frac = format!("{millis:03}");
            write!(f, "{seconds}.{}", frac.trim_end_matches('0'))
        }
    }
}
