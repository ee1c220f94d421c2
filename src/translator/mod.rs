//! Event Translator — standardized analytics calls → Intercom commands.
//!
//! Each operation is a direct, stateless mapping: given its inputs, issue
//! exactly one widget command or nothing at all. Every guard (widget absent,
//! opt-in gate unmet, empty custom payload) degrades to a silent no-op
//! observable only at `debug!` level — optional telemetry never surfaces
//! failures to the host.

pub mod format;
pub mod launcher;

use crate::dispatcher::AnalyticsHandler;
use crate::types::Settings;
use crate::widget::{Properties, WidgetSlot};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Name of the synthetic page-view event.
const VISIT_PAGE_EVENT: &str = "visit_page";

/// Translates dispatcher calls into Intercom widget commands.
///
/// Holds an immutable [`Settings`] snapshot and a shared [`WidgetSlot`];
/// no other state persists between calls.
#[derive(Debug)]
pub struct IntercomTranslator {
    settings: Settings,
    widget: WidgetSlot,
    launcher_budget: Duration,
}

impl IntercomTranslator {
    /// Create a translator over the given settings and widget slot.
    pub fn new(settings: Settings, widget: WidgetSlot) -> Self {
        Self {
            settings,
            widget,
            launcher_budget: launcher::READINESS_BUDGET,
        }
    }

    /// Override the launcher readiness budget (tests use short budgets).
    pub fn with_launcher_budget(mut self, budget: Duration) -> Self {
        self.launcher_budget = budget;
        self
    }

    /// Page view: `trackEvent("visit_page", {url})`, unless tracking is
    /// gated on per-call opt-in. When configured, also schedules the
    /// launcher-hide wait — even if the gate suppressed the page-view call.
    pub async fn track_page(&self, path: &str) {
        let Some(widget) = self.widget.get() else {
            debug!(path, "widget absent, page track dropped");
            return;
        };

        if !self.settings.intercom_requires_attribute {
            let mut payload = Properties::new();
            payload.insert("url".to_string(), Value::String(path.to_string()));
            widget.track_event(VISIT_PAGE_EVENT, Some(payload)).await;
        }

        if self.settings.intercom_hide_launcher {
            launcher::spawn_hide_launcher(self.widget.clone(), self.launcher_budget);
        }
    }

    /// Custom event: fold enabled fields into the name, strip consumed
    /// keys, forward the rest as metadata.
    pub async fn track_event(&self, action: &str, properties: Option<Properties>) {
        let properties = properties.unwrap_or_default();

        let Some(widget) = self.widget.get() else {
            debug!(action, "widget absent, event dropped");
            return;
        };

        let opted_in = properties
            .get(format::OPT_IN_KEY)
            .map(format::is_truthy)
            .unwrap_or(false);
        if self.settings.intercom_requires_attribute && !opted_in {
            debug!(action, "event not opted in, dropped");
            return;
        }

        let name = format::event_name(action, &properties, &self.settings.event_format);
        let metadata = format::remaining_metadata(properties);
        widget.track_event(&name, metadata).await;
    }

    /// Identify: `update({user_id, ..custom})`. Custom fields layer on top
    /// of the base, so a custom `user_id` wins on conflict.
    pub async fn identify_user(&self, user_id: &str, properties: Option<Properties>) {
        let Some(widget) = self.widget.get() else {
            debug!(user_id, "widget absent, identify dropped");
            return;
        };

        let custom = format::custom_properties(&properties.unwrap_or_default());

        let mut payload = Properties::new();
        payload.insert("user_id".to_string(), Value::String(user_id.to_string()));
        for (key, value) in custom {
            payload.insert(key, value);
        }
        widget.update(payload).await;
    }

    /// Forward the vendor-specific custom sub-mapping, if it has anything
    /// in it. An empty custom mapping is "nothing to update", not an
    /// empty-object update request.
    pub async fn set_user_properties(&self, properties: Option<Properties>) {
        let Some(widget) = self.widget.get() else {
            debug!("widget absent, user properties dropped");
            return;
        };

        let custom = format::custom_properties(&properties.unwrap_or_default());
        if custom.is_empty() {
            debug!("no custom properties, update dropped");
            return;
        }
        widget.update(custom).await;
    }

    /// End the messenger session.
    pub async fn clear_session(&self) {
        let Some(widget) = self.widget.get() else {
            debug!("widget absent, session clear dropped");
            return;
        };
        widget.shutdown().await;
    }
}

#[async_trait]
impl AnalyticsHandler for IntercomTranslator {
    async fn page_track(&self, path: &str) {
        self.track_page(path).await;
    }

    async fn event_track(&self, action: &str, properties: Option<Properties>) {
        self.track_event(action, properties).await;
    }

    async fn set_username(&self, user_id: &str, properties: Option<Properties>) {
        self.identify_user(user_id, properties).await;
    }

    async fn set_user_properties(&self, properties: Option<Properties>) {
        IntercomTranslator::set_user_properties(self, properties).await;
    }

    async fn clear_cookies(&self) {
        self.clear_session().await;
    }
}
