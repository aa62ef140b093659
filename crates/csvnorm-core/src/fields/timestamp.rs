use chrono::offset::LocalResult;
use chrono::{NaiveDateTime, SecondsFormat, TimeZone};
use chrono_tz::Tz;

use crate::errors::InvalidDataFormat;

/// Wall-clock zone the source exports are produced in.
const SOURCE_ZONE: Tz = chrono_tz::America::Los_Angeles;

/// Zone the normalized output reports.
const TARGET_ZONE: Tz = chrono_tz::America::New_York;

/// 12-hour clock, two-digit year; chrono accepts the unpadded month, day,
/// and hour the inputs carry.
const TIMESTAMP_FORMAT: &str = "%m/%d/%y %I:%M:%S %p";

/// Reinterprets an `M/d/yy h:mm:ss a` Pacific wall-clock time as the same
/// instant in Eastern time, rendered RFC 3339 with the Eastern offset.
pub fn format_timestamp(value: &str) -> Result<String, InvalidDataFormat> {
    let invalid = || InvalidDataFormat::Timestamp {
        value: value.to_string(),
    };

    let naive = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| invalid())?;

    let pacific = match SOURCE_ZONE.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        // Fall-back hour: both mappings are real instants, take the earlier.
        LocalResult::Ambiguous(earlier, _) => earlier,
        // Spring-forward gap: this wall-clock time never existed.
        LocalResult::None => return Err(invalid()),
    };

    Ok(pacific
        .with_timezone(&TARGET_ZONE)
        .to_rfc3339_opts(SecondsFormat::Secs, false))
}
