//! # Intercom Bridge — analytics calls → messenger commands
//!
//! Connects a generic analytics dispatch surface to the Intercom messenger
//! widget, providing:
//! - Page-view, custom-event, identify, user-properties and session-clear
//!   translation into widget commands
//! - Opt-in gating of tracking calls via per-call markup
//! - A bounded launcher-hide wait for late-loading vendor scripts
//! - A fan-out dispatcher hosts register providers with
//!
//! ## Architecture
//!
//! ```text
//!   dispatcher call → IntercomTranslator → filter/format → WidgetApi command
//!                          │                                    │
//!                      Settings                            WidgetSlot
//!                   (read-only)                      (lazily populated)
//! ```
//!
//! Every precondition failure (widget absent, opt-in gate unmet, empty
//! payload) is a silent no-op: telemetry is best-effort and never breaks
//! the host.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod dispatcher;
pub mod opt_in;
pub mod translator;
pub mod types;
pub mod widget;

// Internal utilities
pub mod observability;

pub use dispatcher::{AnalyticsDispatcher, AnalyticsHandler, DispatchStats};
pub use translator::IntercomTranslator;
pub use types::{Error, EventFormat, Result, Settings};
pub use widget::{Properties, WidgetApi, WidgetSlot};
