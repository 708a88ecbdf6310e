use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Millisecond-precision UTC timestamp layout used on the wire,
/// e.g. `2021-11-27T00:28:30.123Z`.
const WIRE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// Formats a timestamp for time-based item filters, converting to UTC first.
pub fn to_wire_datetime(value: OffsetDateTime) -> String {
    let utc = value.to_offset(UtcOffset::UTC);
    // The layout is static and contains no components that can fail for a
    // valid `OffsetDateTime`.
    utc.format(WIRE_FORMAT).unwrap_or_default()
}

/// Parses a wire timestamp such as a response `timestamp` field.
pub fn from_wire_datetime(value: &str) -> Result<OffsetDateTime, time::error::Parse> {
    PrimitiveDateTime::parse(value.trim(), WIRE_FORMAT).map(PrimitiveDateTime::assume_utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formats_with_millisecond_precision_in_utc() {
        let value = datetime!(2021-11-27 00:28:30.123 UTC);
        assert_eq!(to_wire_datetime(value), "2021-11-27T00:28:30.123Z");
    }

    #[test]
    fn converts_offsets_to_utc_before_formatting() {
        let value = datetime!(2021-11-27 02:28:30.5 +2);
        assert_eq!(to_wire_datetime(value), "2021-11-27T00:28:30.500Z");
    }

    #[test]
    fn parses_service_timestamps() {
        let parsed = from_wire_datetime("2021-11-27T00:28:30.123Z").expect("valid timestamp");
        assert_eq!(parsed, datetime!(2021-11-27 00:28:30.123 UTC));
    }

    #[test]
    fn rejects_timestamps_without_milliseconds() {
        assert!(from_wire_datetime("2021-11-27T00:28:30Z").is_err());
    }
}
