//! Install notifications.
//!
//! Responsibilities:
//! - Record the start of an install of a build target.
//! - Record its outcome (success flag and optional process id).
//!
//! Does NOT handle:
//! - Performing the install or publishing events.
//!
//! Invariants:
//! - `InstallFinished` carries the key and target of the `InstallStarted` it finishes.
//! - Each `InstallStarted` (including its clones) can be finished once. The check
//!   happens when the finished record is built, never during comparison.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::EventError;
use crate::event::KilnEvent;
use crate::key::EventKey;
use crate::target::BuildTarget;

const CATEGORY: &str = "install_apk";

/// Either half of an install notification pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum InstallEvent {
    #[serde(rename = "InstallStarted")]
    Started(InstallStarted),
    #[serde(rename = "InstallFinished")]
    Finished(InstallFinished),
}

impl InstallEvent {
    /// Start an install of `target` under a fresh unique key.
    pub fn started(target: BuildTarget) -> InstallStarted {
        InstallStarted {
            key: EventKey::unique(),
            build_target: target,
            timestamp: Utc::now(),
            finished: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Finish `started`, or report that it was already finished.
    pub fn try_finished(
        started: &InstallStarted,
        success: bool,
        pid: Option<u32>,
    ) -> Result<InstallFinished, EventError> {
        if started.finished.swap(true, Ordering::AcqRel) {
            return Err(EventError::AlreadyFinished { key: started.key });
        }

        tracing::debug!(
            key = %started.key,
            target = %started.build_target,
            success,
            "Install finished"
        );

        Ok(InstallFinished {
            key: started.key,
            build_target: started.build_target.clone(),
            timestamp: Utc::now(),
            success,
            pid,
        })
    }

    /// Finish `started`.
    ///
    /// # Panics
    ///
    /// Panics if `started` (or a clone of it) was already finished. Two finish
    /// records for one install is a caller bug, not a recoverable condition.
    pub fn finished(started: &InstallStarted, success: bool, pid: Option<u32>) -> InstallFinished {
        match Self::try_finished(started, success, pid) {
            Ok(finished) => finished,
            Err(e) => panic!("{e}"),
        }
    }

    fn inner(&self) -> &dyn KilnEvent {
        match self {
            InstallEvent::Started(started) => started as &dyn KilnEvent,
            InstallEvent::Finished(finished) => finished as &dyn KilnEvent,
        }
    }
}

impl From<InstallStarted> for InstallEvent {
    fn from(started: InstallStarted) -> Self {
        InstallEvent::Started(started)
    }
}

impl From<InstallFinished> for InstallEvent {
    fn from(finished: InstallFinished) -> Self {
        InstallEvent::Finished(finished)
    }
}

impl KilnEvent for InstallEvent {
    fn event_key(&self) -> &EventKey {
        self.inner().event_key()
    }

    fn event_name(&self) -> &'static str {
        self.inner().event_name()
    }

    fn category(&self) -> &'static str {
        CATEGORY
    }

    fn value_string(&self) -> String {
        self.inner().value_string()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.inner().timestamp()
    }
}

/// An install of a build target has begun.
///
/// Clones share the "finished" latch with the original.
#[derive(Debug, Clone, Serialize)]
pub struct InstallStarted {
    key: EventKey,
    build_target: BuildTarget,
    timestamp: DateTime<Utc>,
    #[serde(skip)]
    finished: Arc<AtomicBool>,
}

impl InstallStarted {
    pub fn build_target(&self) -> &BuildTarget {
        &self.build_target
    }

    /// Whether a finished record has been built for this install.
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }
}

impl PartialEq for InstallStarted {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.build_target == other.build_target
            && self.timestamp == other.timestamp
    }
}

impl Eq for InstallStarted {}

impl KilnEvent for InstallStarted {
    fn event_key(&self) -> &EventKey {
        &self.key
    }

    fn event_name(&self) -> &'static str {
        "InstallStarted"
    }

    fn category(&self) -> &'static str {
        CATEGORY
    }

    fn value_string(&self) -> String {
        self.build_target.fully_qualified_name()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// An install of a build target has ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallFinished {
    key: EventKey,
    build_target: BuildTarget,
    timestamp: DateTime<Utc>,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pid: Option<u32>,
}

impl InstallFinished {
    pub fn build_target(&self) -> &BuildTarget {
        &self.build_target
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Process id of the installed program, when it was launched.
    pub fn pid(&self) -> Option<u32> {
        self.pid
    }
}

impl KilnEvent for InstallFinished {
    fn event_key(&self) -> &EventKey {
        &self.key
    }

    fn event_name(&self) -> &'static str {
        "InstallFinished"
    }

    fn category(&self) -> &'static str {
        CATEGORY
    }

    fn value_string(&self) -> String {
        self.build_target.fully_qualified_name()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
