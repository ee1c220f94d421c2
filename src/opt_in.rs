//! Opt-in pre-processing for gated tracking.
//!
//! When `intercomRequiresAttribute` is set, individual call sites must mark
//! their properties as opted in before handing them to the dispatcher: a
//! one-time, synchronous transformation of the properties the dispatcher
//! will later read, run by the caller at the call site.

use crate::translator::format::OPT_IN_KEY;
use crate::types::{Error, Result, Settings};
use crate::widget::Properties;
use serde_json::Value;

/// Mark a property mapping as opted in.
///
/// Pass-through when tracking is not gated on the attribute.
pub fn apply(settings: &Settings, mut properties: Properties) -> Properties {
    if settings.intercom_requires_attribute {
        properties.insert(OPT_IN_KEY.to_string(), Value::Bool(true));
    }
    properties
}

/// Rewrite a serialized properties expression, injecting the opt-in flag.
///
/// Empty input is treated as an empty mapping. Input that parses to a
/// non-object is rejected — the dispatcher expects a properties object.
/// When tracking is not gated, the input is returned unchanged.
pub fn rewrite_serialized(settings: &Settings, raw: &str) -> Result<String> {
    if !settings.intercom_requires_attribute {
        return Ok(raw.to_string());
    }

    let properties: Properties = if raw.trim().is_empty() {
        Properties::new()
    } else {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => map,
            other => {
                return Err(Error::validation(format!(
                    "expected a properties object, got {other}"
                )))
            }
        }
    };

    let properties = apply(settings, properties);
    Ok(serde_json::to_string(&Value::Object(properties))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gated() -> Settings {
        Settings {
            intercom_requires_attribute: true,
            ..Settings::default()
        }
    }

    fn props(value: serde_json::Value) -> Properties {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn apply_injects_flag_when_gated() {
        let out = apply(&gated(), props(json!({"category": "users"})));
        assert_eq!(out.get(OPT_IN_KEY), Some(&json!(true)));
        assert_eq!(out.get("category"), Some(&json!("users")));
    }

    #[test]
    fn apply_is_passthrough_when_not_gated() {
        let out = apply(&Settings::default(), props(json!({"category": "users"})));
        assert!(out.get(OPT_IN_KEY).is_none());
    }

    #[test]
    fn rewrite_injects_into_serialized_object() {
        let out = rewrite_serialized(&gated(), r#"{"label":"Search"}"#).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["label"], "Search");
        assert_eq!(parsed[OPT_IN_KEY], true);
    }

    #[test]
    fn rewrite_treats_empty_input_as_empty_mapping() {
        let out = rewrite_serialized(&gated(), "").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!({"intercomEnabled": true}));
    }

    #[test]
    fn rewrite_rejects_non_object_expression() {
        assert!(matches!(
            rewrite_serialized(&gated(), "[1,2]"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            rewrite_serialized(&gated(), "not json"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn rewrite_is_passthrough_when_not_gated() {
        let raw = r#"{"label":"Search"}"#;
        assert_eq!(
            rewrite_serialized(&Settings::default(), raw).unwrap(),
            raw
        );
    }
}
