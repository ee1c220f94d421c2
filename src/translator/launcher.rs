//! Launcher-hide wait — bounded readiness poll for the widget capability.
//!
//! The vendor script may still be booting when the first page track fires,
//! so the hide request waits for the capability to appear. The wait is
//! fire-and-forget with a hard deadline; if the widget never turns up, the
//! launcher is simply left visible.

use crate::widget::{Properties, WidgetSlot};
use serde_json::Value;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};
use tracing::{debug, trace};

/// Maximum time to wait for the widget before giving up.
pub const READINESS_BUDGET: Duration = Duration::from_millis(1000);

/// Poll cadence while waiting.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Spawn a task that hides the default launcher once the widget is ready.
///
/// Polls the slot until a capability is present, then issues
/// `update({hide_default_launcher: true})`. If `budget` expires first the
/// update is never issued. Either way the task exits quietly; the returned
/// handle exists so callers can await or abort the wait.
pub fn spawn_hide_launcher(slot: WidgetSlot, budget: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let deadline = Instant::now() + budget;
        loop {
            if let Some(widget) = slot.get() {
                let mut payload = Properties::new();
                payload.insert("hide_default_launcher".to_string(), Value::Bool(true));
                widget.update(payload).await;
                trace!("default launcher hidden");
                return;
            }
            if Instant::now() >= deadline {
                debug!(
                    budget_ms = budget.as_millis() as u64,
                    "widget not ready within budget, launcher left visible"
                );
                return;
            }
            sleep(POLL_INTERVAL.min(budget)).await;
        }
    })
}
