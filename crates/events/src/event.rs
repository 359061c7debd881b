//! The trait every event record implements.

use chrono::{DateTime, Utc};

use crate::key::EventKey;

/// Common surface of events published by kiln.
pub trait KilnEvent {
    /// Key linking this event to related events.
    fn event_key(&self) -> &EventKey;

    /// Name of the concrete event, e.g. `InstallStarted`.
    fn event_name(&self) -> &'static str;

    /// Category used to group related events in logs and traces.
    fn category(&self) -> &'static str;

    /// Short human readable description of what the event is about.
    fn value_string(&self) -> String;

    /// When the event was created.
    fn timestamp(&self) -> DateTime<Utc>;
}
