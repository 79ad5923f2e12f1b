use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

pub struct TimeUtil;

impl TimeUtil {
    /// Parses RFC 3339 timestamps as well as the offset-less form the monitoring
    /// backend emits (`2024-03-01T12:00:00` or `2024-03-01 12:00:00.123`), which
    /// are taken as UTC.
    pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}

/// Serde adapter for [`TimeUtil::parse_utc`].
pub fn deserialize_utc<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    TimeUtil::parse_utc(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_offset_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        assert_eq!(TimeUtil::parse_utc("2024-03-01T12:00:00Z"), Some(expected));
        assert_eq!(TimeUtil::parse_utc("2024-03-01T14:00:00+02:00"), Some(expected));
        assert_eq!(TimeUtil::parse_utc("2024-03-01T12:00:00"), Some(expected));
        assert_eq!(TimeUtil::parse_utc("2024-03-01 12:00:00.000"), Some(expected));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(TimeUtil::parse_utc("yesterday"), None);
    }
}
