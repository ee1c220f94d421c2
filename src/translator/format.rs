//! Event formatting — pure property filtering and name assembly.
//!
//! Deterministic mapping from inbound analytics properties to the widget's
//! call shape: which optional fields fold into the event name, which keys
//! the bridge consumes, and what survives as forwarded metadata.

use crate::types::EventFormat;
use crate::widget::Properties;
use serde_json::Value;

/// Keys consumed by the bridge and stripped before forwarding.
const CONSUMED_KEYS: [&str; 5] = [
    "eventType",
    "category",
    "label",
    "intercom",
    "intercomEnabled",
];

/// Property key carrying the per-call opt-in flag.
pub const OPT_IN_KEY: &str = "intercomEnabled";

/// Property key nesting vendor-specific custom fields.
pub const CUSTOM_KEY: &str = "intercom";

/// Truthiness in the host framework's sense: `false`, `null`, `0` and the
/// empty string all read as unset.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a property value as a name token. Falsy values yield no token;
/// non-string values stringify the way the host's templating layer coerces
/// them (numbers render decimally).
fn token(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Assemble the event name from `action` plus any enabled, present fields.
///
/// `eventType` is prepended; `category` and `label` are appended, in that
/// order. Tokens are space-joined and the result lower-cased.
pub fn event_name(action: &str, properties: &Properties, format: &EventFormat) -> String {
    let mut tokens: Vec<String> = vec![action.to_string()];

    if format.event_type {
        if let Some(t) = properties.get("eventType").and_then(token) {
            tokens.insert(0, t);
        }
    }
    if format.category {
        if let Some(t) = properties.get("category").and_then(token) {
            tokens.push(t);
        }
    }
    if format.label {
        if let Some(t) = properties.get("label").and_then(token) {
            tokens.push(t);
        }
    }

    tokens.join(" ").to_lowercase()
}

/// Strip the consumed keys; `None` when nothing remains to forward.
pub fn remaining_metadata(mut properties: Properties) -> Option<Properties> {
    for key in CONSUMED_KEYS {
        properties.remove(key);
    }
    if properties.is_empty() {
        None
    } else {
        Some(properties)
    }
}

/// Extract the vendor-specific sub-mapping under `intercom`.
///
/// Absent or non-object values yield an empty mapping; everything outside
/// that sub-mapping is discarded.
pub fn custom_properties(properties: &Properties) -> Properties {
    match properties.get(CUSTOM_KEY) {
        Some(Value::Object(map)) => map.clone(),
        _ => Properties::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventFormat;
    use serde_json::json;

    fn props(value: serde_json::Value) -> Properties {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(null)));
    }

    #[test]
    fn test_name_is_action_only_by_default() {
        let name = event_name(
            "Click",
            &props(json!({"eventType": "UI", "category": "Users", "label": "Search"})),
            &EventFormat::default(),
        );
        assert_eq!(name, "click");
    }

    #[test]
    fn test_name_token_order() {
        let format = EventFormat {
            event_type: true,
            category: true,
            label: true,
        };
        let name = event_name(
            "Click",
            &props(json!({"eventType": "UI", "category": "Users", "label": "Search"})),
            &format,
        );
        assert_eq!(name, "ui click users search");
    }

    #[test]
    fn test_name_skips_absent_and_falsy_fields() {
        let format = EventFormat {
            event_type: true,
            category: true,
            label: true,
        };
        let name = event_name("click", &props(json!({"category": "", "label": "Row"})), &format);
        assert_eq!(name, "click row");
    }

    #[test]
    fn test_name_stringifies_numeric_token() {
        let format = EventFormat {
            category: true,
            ..EventFormat::default()
        };
        let name = event_name("step", &props(json!({"category": 42})), &format);
        assert_eq!(name, "step 42");
    }

    #[test]
    fn test_metadata_strips_consumed_keys() {
        let remaining = remaining_metadata(props(json!({
            "eventType": "UI",
            "category": "Users",
            "label": "Search",
            "intercom": {"plan": "pro"},
            "intercomEnabled": true,
            "value": 5,
        })));
        assert_eq!(remaining, Some(props(json!({"value": 5}))));
    }

    #[test]
    fn test_metadata_none_when_everything_consumed() {
        let remaining = remaining_metadata(props(json!({
            "category": "Users",
            "intercomEnabled": true,
        })));
        assert!(remaining.is_none());
    }

    #[test]
    fn test_custom_properties_extraction() {
        let custom = custom_properties(&props(json!({
            "name": "Jo",
            "intercom": {"plan": "pro", "seats": 3},
        })));
        assert_eq!(custom, props(json!({"plan": "pro", "seats": 3})));
    }

    #[test]
    fn test_custom_properties_non_object_ignored() {
        assert!(custom_properties(&props(json!({"intercom": "pro"}))).is_empty());
        assert!(custom_properties(&Properties::new()).is_empty());
    }
}
