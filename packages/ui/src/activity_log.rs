//! Diagnostic channel for remote calls.
//!
//! Entries are kept in a `Signal<ActivityLog>` context installed by the app
//! root and shown by [`crate::ActivityLogPanel`]. Every entry is also emitted
//! through `tracing`, so it reaches the browser console as well.

use dioxus::prelude::*;

/// Oldest entries are dropped past this many.
pub const MAX_ENTRIES: usize = 200;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, timestamp: String, level: LogLevel, message: &str) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push(LogEntry {
            timestamp,
            level,
            message: message.to_string(),
        });
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .count()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    match level {
        LogLevel::Error => tracing::error!("{message}"),
        LogLevel::Warning => tracing::warn!("{message}"),
        LogLevel::Info | LogLevel::Success => tracing::info!("{message}"),
    }
    log.write().push(current_time(), level, message);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

/// UTC wall clock; native builds have no local time zone at hand.
#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (h, m, s) = ((secs / 3600) % 24, (secs / 60) % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_caps_entries() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 3 {
            log.push("00:00:00".to_string(), LogLevel::Info, &format!("entry {i}"));
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message, "entry 3");
    }

    #[test]
    fn test_error_count() {
        let mut log = ActivityLog::default();
        log.push(String::new(), LogLevel::Error, "a");
        log.push(String::new(), LogLevel::Warning, "b");
        log.push(String::new(), LogLevel::Error, "c");
        assert_eq!(log.error_count(), 2);
    }

    #[test]
    fn test_native_time_shape() {
        let t = current_time();
        assert_eq!(t.len(), 8);
        assert_eq!(t.as_bytes()[2], b':');
    }
}
