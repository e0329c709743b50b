//! Core domain types

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Severity / Origin
// ─────────────────────────────────────────────────────────────────────────────

/// Presentation severity of a log entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
    /// Plain text. Unknown names deserialize to this.
    #[default]
    #[serde(other)]
    Default,
}

impl Severity {
    /// Parse a severity name. Unknown names fall back to [`Severity::Default`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "info" => Severity::Info,
            "warning" | "warn" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Default => "default",
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Where a log entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// An accepted `log` message from the log stream
    Stream,
    /// Generated locally (connection transitions, clear/pause, action outcomes)
    Notice,
}

/// Which of the two push streams a connection serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    Logs,
    Directives,
}

impl StreamKind {
    pub fn label(&self) -> &'static str {
        match self {
            StreamKind::Logs => "Logs",
            StreamKind::Directives => "Directives",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LogEntry
// ─────────────────────────────────────────────────────────────────────────────

/// A single log line. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Monotonic id assigned by the owning sink
    pub id: u64,
    /// Wall-clock time at receipt
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub severity: Severity,
    pub origin: Origin,
}

impl LogEntry {
    pub fn new(id: u64, severity: Severity, origin: Origin, message: impl Into<String>) -> Self {
        Self {
            id,
            timestamp: Local::now(),
            message: message.into(),
            severity,
            origin,
        }
    }

    /// `HH:MM:SS` time of receipt
    pub fn time_display(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    /// Rendered form: `[HH:MM:SS] message`
    pub fn formatted(&self) -> String {
        format!("[{}] {}", self.time_display(), self.message)
    }

    pub fn is_notice(&self) -> bool {
        self.origin == Origin::Notice
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FilterState
// ─────────────────────────────────────────────────────────────────────────────

/// Case-insensitive substring filter over log messages.
///
/// The stored text is always lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    text: String,
}

impl FilterState {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_lowercase(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
    }

    /// An empty filter matches everything.
    pub fn matches(&self, message: &str) -> bool {
        self.text.is_empty() || message.to_lowercase().contains(&self.text)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Directive
// ─────────────────────────────────────────────────────────────────────────────

/// A unit of remote work tracked by the directive server.
///
/// Update payloads may carry only `id` and `status`, so `agent_id` and `task`
/// default to empty strings. Other server fields (`payload`, `timestamp`) are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub agent_id: String,
    #[serde(default)]
    pub task: String,
    pub status: String,
}

impl Directive {
    pub fn new(
        id: impl Into<String>,
        agent_id: impl Into<String>,
        task: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            agent_id: agent_id.into(),
            task: task.into(),
            status: status.into(),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Key {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Key::deserialize(deserializer)? {
        Key::Text(s) => s,
        Key::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_name() {
        assert_eq!(Severity::from_name("success"), Severity::Success);
        assert_eq!(Severity::from_name("INFO"), Severity::Info);
        assert_eq!(Severity::from_name("warn"), Severity::Warning);
        assert_eq!(Severity::from_name("error"), Severity::Error);
        assert_eq!(Severity::from_name("critical"), Severity::Default);
        assert_eq!(Severity::from_name(""), Severity::Default);
    }

    #[test]
    fn test_severity_deserialize_unknown_defaults() {
        let sev: Severity = serde_json::from_str("\"fatal\"").unwrap();
        assert_eq!(sev, Severity::Default);
        let sev: Severity = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(sev, Severity::Warning);
    }

    #[test]
    fn test_log_entry_formatted() {
        let entry = LogEntry::new(1, Severity::Info, Origin::Stream, "hello");
        let formatted = entry.formatted();
        assert!(formatted.starts_with('['));
        assert!(formatted.ends_with("] hello"));
        assert_eq!(formatted.len(), "[00:00:00] hello".len());
    }

    #[test]
    fn test_filter_state_lowercases() {
        let filter = FilterState::new("GPU");
        assert_eq!(filter.text(), "gpu");
        assert!(filter.matches("Optimize gpu"));
        assert!(filter.matches("OPTIMIZE GPU"));
        assert!(!filter.matches("Clean storage"));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = FilterState::default();
        assert!(!filter.is_active());
        assert!(filter.matches(""));
        assert!(filter.matches("anything"));
    }

    #[test]
    fn test_directive_partial_payload() {
        let d: Directive = serde_json::from_str(r#"{"id":"d1","status":"done"}"#).unwrap();
        assert_eq!(d.id, "d1");
        assert_eq!(d.status, "done");
        assert!(d.agent_id.is_empty());
        assert!(d.task.is_empty());
    }

    #[test]
    fn test_directive_ignores_server_fields() {
        let json = r#"{
            "id": "directive_1a2b3c4d",
            "agent_id": "agent_1234",
            "task": "Optimize GPU",
            "payload": {"priority": "high"},
            "timestamp": "2024-01-01T00:00:00",
            "status": "in-progress"
        }"#;
        let d: Directive = serde_json::from_str(json).unwrap();
        assert_eq!(
            d,
            Directive::new("directive_1a2b3c4d", "agent_1234", "Optimize GPU", "in-progress")
        );
    }

    #[test]
    fn test_directive_numeric_id() {
        let d: Directive = serde_json::from_str(r#"{"id":42,"status":"pending"}"#).unwrap();
        assert_eq!(d.id, "42");
    }

    #[test]
    fn test_stream_kind_label() {
        assert_eq!(StreamKind::Logs.label(), "Logs");
        assert_eq!(StreamKind::Directives.label(), "Directives");
    }
}
