//! The log sink: event ingestion and record construction.

use std::fmt::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arc_swap::ArcSwap;
use chrono::{DateTime, Local};

use crate::filter::DisplayFilter;
use crate::format::FormatSettings;
use crate::policy::PanelTheme;
use crate::record::LogRecord;
use crate::render::{self, Surface};
use crate::severity::Severity;
use crate::source_location::split_source_location;
use crate::store::RecordStore;

/// One structured log event, as delivered by a logging framework adapter.
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub severity: Severity,
    /// Name of the logger (target) that emitted the event.
    pub logger: String,
    /// Numeric id of the producing thread.
    pub thread_id: u64,
    pub timestamp: DateTime<Local>,
    /// Formatted payload, possibly starting with a `[file:line] ` tag.
    pub payload: String,
}

/// Receives log events from any number of producer threads and owns the
/// record store the viewer renders from.
///
/// One sink is constructed per process (or per test) and shared behind an
/// `Arc`; there is deliberately no global instance. All methods take
/// `&self` and are safe to call concurrently, with the exception noted on
/// [`update_format`](LogSink::update_format).
#[derive(Debug)]
pub struct LogSink {
    store: RecordStore,
    format: ArcSwap<FormatSettings>,
    theme: PanelTheme,
    capture_source: bool,
    scroll_to_bottom: AtomicBool,
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink {
    /// Create a sink with default format settings and theme. Source
    /// locations are captured in debug builds only, where the logging
    /// macros actually embed them.
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            format: ArcSwap::from_pointee(FormatSettings::default()),
            theme: PanelTheme::default(),
            capture_source: cfg!(debug_assertions),
            scroll_to_bottom: AtomicBool::new(false),
        }
    }

    pub fn with_theme(mut self, theme: PanelTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_capture_source(mut self, capture_source: bool) -> Self {
        self.capture_source = capture_source;
        self
    }

    pub fn captures_source(&self) -> bool {
        self.capture_source
    }

    /// Ingest one event. Callable from any thread; never fails and never
    /// panics on malformed payloads.
    ///
    /// The exclusive store lock is held only for the single append; all
    /// string building happens outside it.
    pub fn ingest(&self, event: LogEvent) {
        let format = self.format.load();

        let mut properties = String::new();
        let mut level_range = None;
        if format.show_time {
            let _ = write!(properties, "[{}] ", event.timestamp.format("%D %T"));
        }
        if format.show_thread {
            let _ = write!(properties, "[{}] ", event.thread_id);
        }
        if format.show_level {
            let start = properties.len();
            let _ = write!(properties, "[{}] ", event.severity.short_code());
            level_range = Some((start, properties.len()));
        }
        if format.show_logger {
            let _ = write!(properties, "[{}] ", event.logger);
        }

        let (location, message) = split_source_location(&event.payload);
        let source = if self.capture_source {
            location.unwrap_or_default().to_string()
        } else {
            String::new()
        };

        let (color, coloring, emphasis) = self.theme.styling_for(event.severity, level_range);

        self.store.append(LogRecord::new(
            properties,
            source,
            message.to_string(),
            coloring,
            color,
            emphasis,
        ));
        self.scroll_to_bottom.store(true, Ordering::Relaxed);
    }

    /// Discard all captured records.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Point-in-time view of the captured records, oldest first.
    pub fn snapshot(&self) -> Vec<Arc<LogRecord>> {
        self.store.snapshot()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Current format settings (one consistent snapshot).
    pub fn format_settings(&self) -> FormatSettings {
        **self.format.load()
    }

    /// Replace the format settings via copy-update-store.
    ///
    /// Must only be called from the render/UI thread: concurrent callers
    /// would race the read-modify-write and one toggle could be lost.
    /// Producers are unaffected either way; they read whichever snapshot
    /// is current when their event arrives.
    pub fn update_format(&self, mutate: impl FnOnce(&mut FormatSettings)) {
        let mut next = **self.format.load();
        mutate(&mut next);
        self.format.store(Arc::new(next));
    }

    /// Run a render pass: snapshot, filter, and emit styled spans to
    /// `surface`. Returns whether the viewer should scroll to the bottom
    /// (new records arrived since the last pass and scroll lock is off).
    pub fn render(&self, filter: &DisplayFilter, surface: &mut dyn Surface) -> bool {
        let format = self.format.load();
        let records = self.store.snapshot();
        render::render_records(&records, filter, format.soft_wrap, surface);

        let appended = self.scroll_to_bottom.swap(false, Ordering::Relaxed);
        appended && !format.scroll_lock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Coloring;
    use chrono::TimeZone;

    fn event(severity: Severity, payload: &str) -> LogEvent {
        LogEvent {
            severity,
            logger: "app".to_string(),
            thread_id: 7,
            timestamp: Local.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).unwrap(),
            payload: payload.to_string(),
        }
    }

    fn sink() -> LogSink {
        LogSink::new().with_capture_source(true)
    }

    #[test]
    fn test_properties_field_order() {
        let sink = sink();
        sink.ingest(event(Severity::Info, "ready"));

        let records = sink.snapshot();
        let properties = &records[0].properties;
        assert_eq!(properties, "[03/09/24 14:30:05] [7] [I] [app] ");
    }

    #[test]
    fn test_hidden_fields_are_omitted() {
        let sink = sink();
        sink.update_format(|f| {
            f.show_time = false;
            f.show_logger = false;
        });
        sink.ingest(event(Severity::Info, "ready"));

        assert_eq!(sink.snapshot()[0].properties, "[7] [I] ");
    }

    #[test]
    fn test_level_tag_range_covers_the_tag() {
        let sink = sink();
        sink.ingest(event(Severity::Debug, "x"));

        let record = &sink.snapshot()[0];
        match record.coloring {
            Coloring::Properties { start, end } => {
                assert_eq!(&record.properties[start..end], "[D] ");
                assert!(end <= record.properties.len());
            }
            other => panic!("expected a properties range, got {other:?}"),
        }
    }

    #[test]
    fn test_level_hidden_degrades_debug_to_plain() {
        let sink = sink();
        sink.update_format(|f| f.show_level = false);
        sink.ingest(event(Severity::Debug, "x"));

        assert_eq!(sink.snapshot()[0].coloring, Coloring::None);
    }

    #[test]
    fn test_warn_colors_whole_message_with_level_hidden() {
        let sink = sink();
        sink.update_format(|f| f.show_level = false);
        sink.ingest(event(Severity::Warn, "x"));

        assert_eq!(sink.snapshot()[0].coloring, Coloring::WholeMessage);
    }

    #[test]
    fn test_level_tag_as_first_field_renders_plain() {
        // With time and thread hidden the level tag starts at byte 0 and
        // cannot be expressed as a properties sub-range.
        let sink = sink();
        sink.update_format(|f| {
            f.show_time = false;
            f.show_thread = false;
        });
        sink.ingest(event(Severity::Info, "x"));

        assert_eq!(sink.snapshot()[0].coloring, Coloring::None);
    }

    #[test]
    fn test_source_split_and_capture() {
        let sink = sink();
        sink.ingest(event(Severity::Error, "[db.rs:120] connection lost"));

        let record = &sink.snapshot()[0];
        assert_eq!(record.source, "db.rs:120");
        assert_eq!(record.message, "connection lost");
    }

    #[test]
    fn test_source_discarded_when_capture_disabled() {
        let sink = LogSink::new().with_capture_source(false);
        sink.ingest(event(Severity::Error, "[db.rs:120] connection lost"));

        let record = &sink.snapshot()[0];
        assert_eq!(record.source, "");
        // The tag is still stripped from the message.
        assert_eq!(record.message, "connection lost");
    }

    #[test]
    fn test_clear_then_snapshot_is_empty() {
        let sink = sink();
        sink.ingest(event(Severity::Info, "a"));
        sink.ingest(event(Severity::Info, "b"));

        sink.clear();
        assert!(sink.snapshot().is_empty());

        sink.clear();
        assert!(sink.is_empty());
    }
}
