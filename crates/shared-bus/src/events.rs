//! # Platform Events
//!
//! Defines all event types that flow through the shared bus. These are the
//! change notifications emitted by the external-store side (signature
//! toggles, report refreshes) and consumed by the report-sync layer.

use serde::{Deserialize, Serialize};
use shared_types::entities::SignerEntry;

/// All events that can be published to the event bus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlatformEvent {
    /// A user toggled their endorsement of a report on or off.
    ///
    /// Carries only the toggled signer; consumers re-read the full signer
    /// list from the report source, so delivery is level-triggered and a
    /// missed event is repaired by the next one.
    SignatureToggled {
        /// The report whose signer list changed.
        report_id: String,
        /// The signer that was toggled.
        signer: SignerEntry,
        /// `true` when the endorsement was added, `false` when removed.
        active: bool,
    },

    /// The report aggregate changed (counters, updates, content edits).
    ReportRefreshed {
        /// The report that changed.
        report_id: String,
    },

    /// A sync pass failed in a way that needs operator attention.
    SyncFailed {
        /// The report whose sync failed.
        report_id: String,
        /// The component that reported the failure.
        component: String,
        /// Error description.
        error: String,
    },
}

impl PlatformEvent {
    /// Get the topic for this event (for filtering).
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            Self::SignatureToggled { .. } => EventTopic::Signatures,
            Self::ReportRefreshed { .. } => EventTopic::Reports,
            Self::SyncFailed { .. } => EventTopic::DeadLetterQueue,
        }
    }

    /// Get the report this event concerns.
    #[must_use]
    pub fn report_id(&self) -> &str {
        match self {
            Self::SignatureToggled { report_id, .. }
            | Self::ReportRefreshed { report_id }
            | Self::SyncFailed { report_id, .. } => report_id,
        }
    }
}

/// Event topics for subscription filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Signature-toggle store changes.
    Signatures,
    /// Report aggregate changes.
    Reports,
    /// Dead Letter Queue for failed sync passes.
    DeadLetterQueue,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Report ids to include. Empty means all reports.
    pub report_ids: Vec<String>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            report_ids: Vec::new(),
        }
    }

    /// Create a filter for events concerning a single report.
    #[must_use]
    pub fn for_report(report_id: impl Into<String>) -> Self {
        Self {
            topics: Vec::new(),
            report_ids: vec![report_id.into()],
        }
    }

    /// Restrict an existing filter to a single report.
    #[must_use]
    pub fn with_report(mut self, report_id: impl Into<String>) -> Self {
        self.report_ids.push(report_id.into());
        self
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &PlatformEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let report_match = self.report_ids.is_empty()
            || self.report_ids.iter().any(|id| id == event.report_id());

        topic_match && report_match
    }
}
