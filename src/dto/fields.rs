//! Field accessors for loosely typed JSON request bodies.
//!
//! A JSON `null` counts as absent, except through [`optional_nullable`] where it means
//! "clear the column". A present value of the wrong JSON type is an `InvalidFormat` error
//! naming the field.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::utils::date::parse_wire_date;

pub type JsonObject = serde_json::Map<String, JsonValue>;

pub fn into_object(value: JsonValue) -> Result<JsonObject> {
    match value {
        JsonValue::Object(map) => Ok(map),
        other => Err(Error::BadRequest(format!(
            "request body must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

pub fn required<T: DeserializeOwned>(object: &JsonObject, key: &str) -> Result<T> {
    match present(object, key) {
        Some(value) => decode(key, value),
        None => Err(Error::MissingField(format!("field `{}` is required", key))),
    }
}

pub fn optional<T: DeserializeOwned>(object: &JsonObject, key: &str) -> Result<Option<T>> {
    present(object, key).map(|value| decode(key, value)).transpose()
}

/// Three states for nullable columns: absent keeps, `null` clears, a value sets.
pub fn optional_nullable<T: DeserializeOwned>(
    object: &JsonObject,
    key: &str,
) -> Result<Option<Option<T>>> {
    match object.get(key) {
        None => Ok(None),
        Some(JsonValue::Null) => Ok(Some(None)),
        Some(value) => decode(key, value).map(|v| Some(Some(v))),
    }
}

pub fn required_date(object: &JsonObject, key: &str) -> Result<NaiveDate> {
    let raw: String = required(object, key)?;
    parse_wire_date(key, &raw)
}

/// Parses only when the body actually carries text for `key`.
pub fn optional_date(object: &JsonObject, key: &str) -> Result<Option<NaiveDate>> {
    optional::<String>(object, key)?
        .map(|raw| parse_wire_date(key, &raw))
        .transpose()
}

fn present<'a>(object: &'a JsonObject, key: &str) -> Option<&'a JsonValue> {
    object.get(key).filter(|value| !value.is_null())
}

fn decode<T: DeserializeOwned>(key: &str, value: &JsonValue) -> Result<T> {
    T::deserialize(value)
        .map_err(|e| Error::InvalidFormat(format!("field `{}` has the wrong type: {}", key, e)))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: JsonValue) -> JsonObject {
        into_object(value).unwrap()
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = into_object(json!([1, 2])).unwrap_err();
        assert!(matches!(err, Error::BadRequest(msg) if msg.contains("an array")));
    }

    #[test]
    fn null_counts_as_absent() {
        let body = object(json!({ "age": null }));
        assert!(matches!(required::<i64>(&body, "age"), Err(Error::MissingField(_))));
        assert_eq!(optional::<i64>(&body, "age").unwrap(), None);
    }

    #[test]
    fn wrong_type_is_invalid_format() {
        let body = object(json!({ "age": "thirty" }));
        let err = required::<i64>(&body, "age").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(msg) if msg.contains("`age`")));
    }

    #[test]
    fn nullable_distinguishes_absent_null_and_value() {
        let body = object(json!({ "executor_id": null, "order_id": 4 }));
        assert_eq!(optional_nullable::<i64>(&body, "executor_id").unwrap(), Some(None));
        assert_eq!(optional_nullable::<i64>(&body, "order_id").unwrap(), Some(Some(4)));
        assert_eq!(optional_nullable::<i64>(&body, "price").unwrap(), None);
    }

    #[test]
    fn optional_date_parses_only_supplied_text() {
        let body = object(json!({ "start_date": "01/15/2024" }));
        assert_eq!(
            optional_date(&body, "start_date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(optional_date(&body, "end_date").unwrap(), None);
    }
}
