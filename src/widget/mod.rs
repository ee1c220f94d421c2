//! Widget capability — the injected handle to the Intercom messenger API.
//!
//! Replaces a page-global vendor object with an explicit capability: the
//! host installs an implementation into a [`WidgetSlot`] once the vendor
//! script is live, and every translator operation checks the slot before
//! issuing a command. The slot may stay empty forever; nothing here assumes
//! the vendor ever loads.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::{Arc, RwLock};

/// JSON object payload exchanged with the widget.
pub type Properties = Map<String, Value>;

/// Outbound command surface of the messenger widget.
///
/// Implementations are fire-and-forget: delivery failures are theirs to
/// swallow. Callers never inspect outcomes.
#[async_trait]
pub trait WidgetApi: Send + Sync {
    /// Record a named event, optionally carrying metadata.
    async fn track_event(&self, name: &str, metadata: Option<Properties>);

    /// Update user or messenger state.
    async fn update(&self, payload: Properties);

    /// End the current messenger session.
    async fn shutdown(&self);
}

/// Shared, lazily-populated slot holding the widget capability.
///
/// Starts empty. The host installs the capability whenever the vendor
/// script finishes loading, and may clear it again (e.g. on consent
/// withdrawal). Cloning shares the underlying slot.
#[derive(Clone, Default)]
pub struct WidgetSlot {
    inner: Arc<RwLock<Option<Arc<dyn WidgetApi>>>>,
}

impl WidgetSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current capability, if any. A poisoned lock reads as absent.
    pub fn get(&self) -> Option<Arc<dyn WidgetApi>> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }

    /// Install the widget capability.
    pub fn install(&self, api: Arc<dyn WidgetApi>) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(api);
        }
    }

    /// Remove the capability; subsequent operations no-op.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }

    /// Whether a capability is currently installed.
    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

impl fmt::Debug for WidgetSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetSlot")
            .field("present", &self.is_present())
            .finish()
    }
}
