//! Text formats shared by forms and the persisted blobs.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Calendar date format used for due dates and ledger keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_MINUTES: &str = "%Y-%m-%dT%H:%M";
const DATETIME_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a local date-time with minute or second precision.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, DATETIME_MINUTES)
        .or_else(|_| NaiveDateTime::parse_from_str(s, DATETIME_SECONDS))
        .ok()
}

/// Format a date-time, dropping seconds when they are zero.
pub fn format_datetime(time: NaiveDateTime) -> String {
    if time.second() == 0 {
        time.format(DATETIME_MINUTES).to_string()
    } else {
        time.format(DATETIME_SECONDS).to_string()
    }
}

/// Optional date stored as a string, with `""` meaning absent.
pub(crate) mod optional_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => s.serialize_str(&super::format_date(*date)),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => super::parse_date(text)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid date: {text}"))),
        }
    }
}

/// Local date-time stored in the `datetime-local` text form.
pub(crate) mod local_datetime {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_datetime(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_datetime(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date-time: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_keeps_entered_precision() {
        let t = parse_datetime("2024-05-01T10:00").unwrap();
        assert_eq!(format_datetime(t), "2024-05-01T10:00");

        let t = parse_datetime("2024-05-01T10:00:30").unwrap();
        assert_eq!(format_datetime(t), "2024-05-01T10:00:30");
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(parse_date("2024-13-01").is_none());
        assert!(parse_date("").is_none());
        assert!(parse_datetime("tomorrow").is_none());
        assert!(parse_datetime("2024-05-01").is_none());
    }
}
