//! Dispatch trace recording and persistence.
//!
//! This module records the outcome of each dispatched event and can persist
//! the recording as JSON, for diagnosing routing problems ("which handler
//! swallowed that click?") and for replaying event sequences in tests.
//!
//! ## Trace Data Model
//!
//! The live [`Event`] and [`MatchResult`] types are not serialized
//! directly; the trace stores serializable summaries ([`EventSummary`],
//! [`OutcomeSummary`]) that capture what diagnosis needs: the event's kind,
//! the targeted receiver, the window position, and how dispatch resolved.
//!
//! ## File Location
//!
//! The default trace file lives under the platform data directory, e.g.
//! `~/.local/share/evroute/dispatch-trace.json` on Linux. Any explicit path
//! can be used instead via [`TraceRecorder::save_to`] and [`load_from`].
//!
//! ## Schema Version
//!
//! The trace file includes a schema version. If the version doesn't match
//! the current code, the trace is discarded on load (graceful degradation
//! to an empty history).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use evroute_events::{Event, EventKind, MouseButton};

use crate::error::TraceError;
use crate::handler::MatchResult;

/// Current schema version for the trace file.
///
/// Increment this when making breaking changes to the trace format.
const SCHEMA_VERSION: u32 = 1;

/// Application name used for the data directory.
const APP_NAME: &str = "evroute";

/// Trace file name.
const TRACE_FILENAME: &str = "dispatch-trace.json";

// =============================================================================
// Serializable Data Types
// =============================================================================

/// Root trace data structure.
///
/// This is the top-level structure serialized to the trace file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceData {
    /// Schema version for forward compatibility.
    pub schema_version: u32,
    /// Recorded dispatches in order.
    pub entries: Vec<TraceEntry>,
}

/// One recorded dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraceEntry {
    /// Position of this entry in the recording, starting at 0.
    pub seq: u64,
    /// Summary of the dispatched event.
    pub event: EventSummary,
    /// How dispatch resolved.
    pub outcome: OutcomeSummary,
}

/// Serializable summary of a dispatched event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventSummary {
    /// Stable label for the event kind, e.g. `mouse-down-left`.
    pub kind: String,
    /// The targeted receiver's id.
    pub receiver: u64,
    /// Window-space x position.
    pub x: f64,
    /// Window-space y position.
    pub y: f64,
}

impl EventSummary {
    fn from_event(event: &Event) -> Self {
        EventSummary {
            kind: kind_label(event.kind()),
            receiver: event.receiver.id,
            x: event.position.x,
            y: event.position.y,
        }
    }
}

/// Serializable summary of a [`MatchResult`].
///
/// The callback's error value is not persisted, only the fact that the
/// callback failed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OutcomeSummary {
    NoMatch,
    MatchedNoAction,
    Handled,
    CallbackFailed,
}

impl From<&MatchResult> for OutcomeSummary {
    fn from(result: &MatchResult) -> Self {
        match result {
            MatchResult::NoMatch => OutcomeSummary::NoMatch,
            MatchResult::MatchedNoAction => OutcomeSummary::MatchedNoAction,
            MatchResult::Handled => OutcomeSummary::Handled,
            MatchResult::CallbackFailed(_) => OutcomeSummary::CallbackFailed,
        }
    }
}

fn kind_label(kind: EventKind) -> String {
    match kind {
        EventKind::KeyDown => "key-down".to_string(),
        EventKind::MouseDown(button) => format!("mouse-down-{}", button_label(button)),
        EventKind::MouseUp(button) => format!("mouse-up-{}", button_label(button)),
        EventKind::MouseMoved(button) => format!("mouse-moved-{}", button_label(button)),
        EventKind::Scroll => "scroll".to_string(),
    }
}

fn button_label(button: MouseButton) -> &'static str {
    match button {
        MouseButton::Left => "left",
        MouseButton::Middle => "middle",
        MouseButton::Right => "right",
    }
}

// =============================================================================
// Recorder
// =============================================================================

/// Accumulates dispatch outcomes in memory.
///
/// Install into a chain with
/// [`HandlerChain::record_into`](crate::chain::HandlerChain::record_into),
/// or call [`TraceRecorder::record`] directly from a custom router.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    entries: Vec<TraceEntry>,
    next_seq: u64,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one dispatch outcome.
    pub fn record(&mut self, event: &Event, outcome: &MatchResult) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(TraceEntry {
            seq,
            event: EventSummary::from_event(event),
            outcome: outcome.into(),
        });
    }

    /// The recorded entries in dispatch order.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the recorder into serializable trace data.
    pub fn into_data(self) -> TraceData {
        TraceData {
            schema_version: SCHEMA_VERSION,
            entries: self.entries,
        }
    }

    /// Writes the recording as JSON to the given path.
    pub fn save_to(&self, path: &Path) -> Result<(), TraceError> {
        let data = TraceData {
            schema_version: SCHEMA_VERSION,
            entries: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(path, json)?;
        Ok(())
    }
}

// =============================================================================
// Trace File Path
// =============================================================================

/// Returns the default path for the trace file.
///
/// On Linux this is `~/.local/share/evroute/dispatch-trace.json`. Returns
/// `None` if the platform data directory cannot be determined.
///
/// Creates the `evroute` subdirectory if it doesn't exist.
pub fn default_trace_path() -> Option<PathBuf> {
    let data_dir = dirs::data_dir()?;
    let app_dir = data_dir.join(APP_NAME);

    // Create the app directory if it doesn't exist
    if !app_dir.exists() {
        if let Err(e) = fs::create_dir_all(&app_dir) {
            eprintln!("Failed to create trace directory {:?}: {}", app_dir, e);
            return None;
        }
    }

    Some(app_dir.join(TRACE_FILENAME))
}

/// Loads a trace from the given path.
///
/// Returns `Ok(None)` if the file's schema version doesn't match the
/// current code; the stale trace is discarded rather than reported as an
/// error.
pub fn load_from(path: &Path) -> Result<Option<TraceData>, TraceError> {
    let json = fs::read_to_string(path)?;
    let data: TraceData = serde_json::from_str(&json)?;

    if data.schema_version != SCHEMA_VERSION {
        return Ok(None);
    }
    Ok(Some(data))
}
