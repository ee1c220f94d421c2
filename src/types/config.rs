//! Configuration structures.
//!
//! Settings are populated once by the host framework at configuration time
//! and stay read-only for the lifetime of the translator. External key names
//! are camelCase to match the host's settings object.

use serde::{Deserialize, Serialize};

/// Bridge configuration, as read from the host framework's settings object.
///
/// Unrecognized keys are ignored: hosts pass a settings object shared by
/// every analytics provider they load.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Gate event and page tracking on an explicit per-call opt-in flag.
    pub intercom_requires_attribute: bool,

    /// Hide the messenger's default launcher once the widget is ready.
    pub intercom_hide_launcher: bool,

    /// Which optional property fields fold into the event name.
    pub event_format: EventFormat,
}

/// Controls which optional fields are folded into the event name string.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EventFormat {
    /// Prepend `eventType` to the event name.
    pub event_type: bool,

    /// Append `category` to the event name.
    pub category: bool,

    /// Append `label` to the event name.
    pub label: bool,
}

impl Settings {
    /// Deserialize settings from the host's JSON settings mapping.
    pub fn from_value(value: serde_json::Value) -> crate::types::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let settings = Settings::default();
        assert!(!settings.intercom_requires_attribute);
        assert!(!settings.intercom_hide_launcher);
        assert!(!settings.event_format.event_type);
        assert!(!settings.event_format.category);
        assert!(!settings.event_format.label);
    }

    #[test]
    fn from_value_reads_camel_case_keys() {
        let settings = Settings::from_value(serde_json::json!({
            "intercomRequiresAttribute": true,
            "intercomHideLauncher": true,
            "eventFormat": { "category": true },
        }))
        .unwrap();

        assert!(settings.intercom_requires_attribute);
        assert!(settings.intercom_hide_launcher);
        assert!(settings.event_format.category);
        assert!(!settings.event_format.event_type);
    }

    #[test]
    fn from_value_ignores_unrelated_provider_keys() {
        let settings = Settings::from_value(serde_json::json!({
            "pageTracking": { "autoTrackVirtualPages": true },
            "intercomHideLauncher": true,
        }))
        .unwrap();

        assert!(settings.intercom_hide_launcher);
        assert!(!settings.intercom_requires_attribute);
    }

    #[test]
    fn from_value_rejects_non_object() {
        assert!(Settings::from_value(serde_json::json!("nope")).is_err());
    }
}
