//! Analytics dispatcher — pluggable registry for provider handlers.
//!
//! A minimal rendition of the host framework's dispatch surface. Providers
//! register once; each inbound analytics call then fans out to every
//! registered handler, in registration order, one at a time. Handlers never
//! report outcomes, so dispatch cannot fail.

use crate::widget::Properties;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Inbound analytics operations a provider may handle.
///
/// Every method defaults to a no-op so a provider implements only the calls
/// it supports.
#[async_trait]
pub trait AnalyticsHandler: Send + Sync {
    /// Page view with the current path.
    async fn page_track(&self, _path: &str) {}

    /// Custom event with optional properties.
    async fn event_track(&self, _action: &str, _properties: Option<Properties>) {}

    /// Associate the session with a user id.
    async fn set_username(&self, _user_id: &str, _properties: Option<Properties>) {}

    /// Attach properties to the current user.
    async fn set_user_properties(&self, _properties: Option<Properties>) {}

    /// Clear provider-side session state.
    async fn clear_cookies(&self) {}
}

/// Counters over dispatched calls.
#[derive(Debug, Default, Clone)]
pub struct DispatchStats {
    pub page_tracks: u64,
    pub event_tracks: u64,
    pub identify_calls: u64,
    pub user_property_calls: u64,
    pub clear_calls: u64,
}

/// Fan-out dispatcher for registered analytics handlers.
#[derive(Default)]
pub struct AnalyticsDispatcher {
    handlers: Vec<Arc<dyn AnalyticsHandler>>,
    stats: DispatchStats,
}

impl AnalyticsDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider handler. Handlers run in registration order.
    pub fn register(&mut self, handler: Arc<dyn AnalyticsHandler>) {
        self.handlers.push(handler);
    }

    /// Snapshot of dispatch counters.
    pub fn stats(&self) -> DispatchStats {
        self.stats.clone()
    }

    /// Dispatch a page view to all handlers.
    pub async fn page_track(&mut self, path: &str) {
        self.stats.page_tracks += 1;
        debug!(path, handlers = self.handlers.len(), "dispatching page track");
        for handler in &self.handlers {
            handler.page_track(path).await;
        }
    }

    /// Dispatch a custom event to all handlers.
    pub async fn event_track(&mut self, action: &str, properties: Option<Properties>) {
        self.stats.event_tracks += 1;
        debug!(action, handlers = self.handlers.len(), "dispatching event track");
        for handler in &self.handlers {
            handler.event_track(action, properties.clone()).await;
        }
    }

    /// Dispatch a user identification to all handlers.
    pub async fn set_username(&mut self, user_id: &str, properties: Option<Properties>) {
        self.stats.identify_calls += 1;
        debug!(user_id, "dispatching set username");
        for handler in &self.handlers {
            handler.set_username(user_id, properties.clone()).await;
        }
    }

    /// Dispatch a user-properties update to all handlers.
    pub async fn set_user_properties(&mut self, properties: Option<Properties>) {
        self.stats.user_property_calls += 1;
        debug!("dispatching set user properties");
        for handler in &self.handlers {
            handler.set_user_properties(properties.clone()).await;
        }
    }

    /// Dispatch a session clear to all handlers.
    pub async fn clear_cookies(&mut self) {
        self.stats.clear_calls += 1;
        debug!("dispatching clear cookies");
        for handler in &self.handlers {
            handler.clear_cookies().await;
        }
    }
}

impl fmt::Debug for AnalyticsDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyticsDispatcher")
            .field("handlers", &self.handlers.len())
            .field("stats", &self.stats)
            .finish()
    }
}
