//! Log sink - the accumulated log lines plus their pause and filter policy.
//!
//! Intake paths:
//! - [`LogSink::append`] for `log` messages from the log stream. Dropped
//!   while paused.
//! - [`LogSink::record`] for `log` messages carried by the directive stream,
//!   which pause does not gate.
//! - [`LogSink::notice`] for locally generated lines (connection changes,
//!   clear/pause notices, directive and action outcomes). Always recorded.
//!
//! Filtering never removes entries; it only changes which ones are visible.

use sentinel_core::{FilterState, LogEntry, Origin, Severity};

/// Notice recorded after a manual clear
pub const CLEARED_NOTICE: &str = "Logs cleared manually.";
/// Notice recorded when intake from the log stream stops
pub const PAUSED_NOTICE: &str = "Logs paused.";
/// Notice recorded when intake from the log stream resumes
pub const RESUMED_NOTICE: &str = "Logs resumed.";

#[derive(Debug, Default)]
pub struct LogSink {
    entries: Vec<LogEntry>,
    filter: FilterState,
    paused: bool,
    next_id: u64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stream message. Returns the new entry id, or `None` when
    /// paused (the message is discarded, not queued).
    pub fn append(&mut self, message: impl Into<String>, severity: Severity) -> Option<u64> {
        if self.paused {
            return None;
        }
        Some(self.push(Origin::Stream, message.into(), severity))
    }

    /// Record a stream message regardless of pause state.
    pub fn record(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.push(Origin::Stream, message.into(), severity)
    }

    /// Record a locally generated line regardless of pause state.
    pub fn notice(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.push(Origin::Notice, message.into(), severity)
    }

    fn push(&mut self, origin: Origin, message: String, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(LogEntry::new(id, severity, origin, message));
        id
    }

    /// Replace the active filter. Stored lowercase.
    pub fn set_filter(&mut self, text: &str) {
        self.filter = FilterState::new(text);
    }

    /// Discard every entry, then record the clear notice.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.notice(CLEARED_NOTICE, Severity::Info);
    }

    /// Flip the pause flag and record the transition. Returns the new state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        let text = if self.paused {
            PAUSED_NOTICE
        } else {
            RESUMED_NOTICE
        };
        self.notice(text, Severity::Info);
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// All entries in receipt order, visible or not
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_visible(&self, entry: &LogEntry) -> bool {
        self.filter.matches(&entry.message)
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter().filter(move |e| self.is_visible(e))
    }

    pub fn visible_count(&self) -> usize {
        self.visible_entries().count()
    }

    /// Entries that came from the log stream
    pub fn stream_entries(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter().filter(|e| e.origin == Origin::Stream)
    }

    /// Id of the newest entry
    pub fn last_id(&self) -> Option<u64> {
        self.entries.last().map(|e| e.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
