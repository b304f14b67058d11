//! # Shared Bus - Event Bus for the Petition Sync Layer
//!
//! Carries change notifications from the external stores (signature
//! toggles, report refreshes) to the report-sync subsystem.
//!
//! ```text
//! ┌──────────────────┐                    ┌──────────────────┐
//! │  External store  │                    │   Report sync    │
//! │  adapters        │    publish()       │   (cl-03)        │
//! │                  │ ──────┐            │                  │
//! └──────────────────┘       │            └──────────────────┘
//!                            ▼                    ↑
//!                      ┌──────────────┐          │
//!                      │  Event Bus   │          │
//!                      │              │ ─────────┘
//!                      └──────────────┘  subscribe()
//! ```
//!
//! Delivery is level-triggered: events announce that something changed and
//! consumers re-read the authoritative external store, so a lagged or
//! dropped event is repaired by the next one.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, PlatformEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before backpressure.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
