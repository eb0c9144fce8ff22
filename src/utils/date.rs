use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Calendar dates travel over the wire as `MM/DD/YYYY`.
pub const WIRE_DATE_FORMAT: &str = "%m/%d/%Y";

pub fn parse_wire_date(field: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), WIRE_DATE_FORMAT).map_err(|e| {
        Error::InvalidFormat(format!(
            "field `{}` must be a MM/DD/YYYY date, got {:?}: {}",
            field, raw, e
        ))
    })
}

pub fn format_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// `#[serde(with = "wire_date")]` for `NaiveDate` fields in response bodies.
pub mod wire_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_wire_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, super::WIRE_DATE_FORMAT).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_first() {
        let date = parse_wire_date("start_date", "01/15/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn formats_with_leading_zeros() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(format_wire_date(date), "03/01/2024");
    }

    #[test]
    fn rejects_day_first_and_iso() {
        for raw in ["15/01/2024", "2024-01-15", "", "02/30/2024"] {
            let err = parse_wire_date("end_date", raw).unwrap_err();
            assert!(matches!(err, Error::InvalidFormat(msg) if msg.contains("end_date")));
        }
    }

    #[test]
    fn serde_helper_round_trips() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "wire_date")]
            at: NaiveDate,
        }

        let json = serde_json::json!({ "at": "12/31/1999" });
        let parsed: Wrapper = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(parsed.at, NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json);
    }
}
