use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `deserialize_with` helpers for display-only booking fields. A value in an
/// unexpected shape decodes as `None` instead of failing the whole list.
pub struct LenientDecode;

impl LenientDecode {
    pub fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(Self::date_from_value))
    }

    pub fn date_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(Self::date_time_from_value))
    }

    pub fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok().filter(|amount| amount.is_finite()),
            _ => None,
        })
    }

    pub fn parse_date(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| Self::parse_date_time(raw).map(|moment| moment.date()))
    }

    /// Local (`2024-05-10T09:15:30.123`), zoned (`...Z`, `...+05:30`),
    /// space-separated, or date-only timestamps.
    pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        raw.parse::<NaiveDateTime>()
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|moment| moment.naive_local()))
            .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    }

    fn date_from_value(value: &Value) -> Option<NaiveDate> {
        match value {
            Value::String(text) => Self::parse_date(text),
            Value::Array(parts) => Self::from_parts(parts).map(|moment| moment.date()),
            _ => None,
        }
    }

    fn date_time_from_value(value: &Value) -> Option<NaiveDateTime> {
        match value {
            Value::String(text) => Self::parse_date_time(text),
            Value::Array(parts) => Self::from_parts(parts),
            _ => None,
        }
    }

    // [year, month, day, hour?, minute?, second?, nanos?]
    fn from_parts(parts: &[Value]) -> Option<NaiveDateTime> {
        let numbers = parts.iter().map(Value::as_u64).collect::<Option<Vec<_>>>()?;
        let part = |index: usize| numbers.get(index).copied().map_or(Some(0), |n| u32::try_from(n).ok());

        let year = i32::try_from(*numbers.first()?).ok()?;
        let date = NaiveDate::from_ymd_opt(year, part(1)?, part(2)?)?;
        date.and_hms_nano_opt(part(3)?, part(4)?, part(5)?, part(6)?)
    }
}
