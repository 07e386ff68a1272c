//! `log`-crate integration and per-logger severity thresholds.
//!
//! [`LogBridge`] is the glue between the `log` facade and a [`LogSink`]:
//! installed as the global logger, it checks each record against the
//! per-target thresholds in a [`LevelRegistry`], then hands a structured
//! [`LogEvent`] to the sink.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;
use log::{Log, Metadata, Record};
use parking_lot::RwLock;

use crate::severity::Severity;
use crate::sink::{LogEvent, LogSink};

/// Registry of named loggers and their severity thresholds.
///
/// The viewer's "Levels" popup edits levels through this trait; the
/// settings module persists and restores the full table.
pub trait LoggerRegistry: Send + Sync {
    /// All known loggers with their current levels, sorted by name.
    fn loggers(&self) -> Vec<(String, Severity)>;

    /// Set the threshold for `name`, creating the entry if unseen.
    fn set_level(&self, name: &str, level: Severity);
}

/// In-memory level table keyed by logger (target) name.
///
/// Targets are registered lazily at the default level the first time they
/// emit, so the Levels popup always lists every logger that has actually
/// been heard from.
#[derive(Debug)]
pub struct LevelRegistry {
    default_level: Severity,
    levels: RwLock<BTreeMap<String, Severity>>,
}

impl LevelRegistry {
    pub fn new(default_level: Severity) -> Self {
        Self {
            default_level,
            levels: RwLock::new(BTreeMap::new()),
        }
    }

    /// Threshold for `name`, registering it at the default level if unseen.
    pub fn level_for(&self, name: &str) -> Severity {
        if let Some(level) = self.levels.read().get(name) {
            return *level;
        }
        let mut levels = self.levels.write();
        *levels
            .entry(name.to_string())
            .or_insert(self.default_level)
    }
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new(Severity::Trace)
    }
}

impl LoggerRegistry for LevelRegistry {
    fn loggers(&self) -> Vec<(String, Severity)> {
        self.levels
            .read()
            .iter()
            .map(|(name, level)| (name.clone(), *level))
            .collect()
    }

    fn set_level(&self, name: &str, level: Severity) {
        self.levels.write().insert(name.to_string(), level);
    }
}

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// Small monotonically assigned id for the calling thread.
///
/// `std::thread::ThreadId` has no stable numeric form, so ids are handed
/// out in first-use order; they are display labels, nothing more.
pub fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| *id)
}

/// Adapter implementing [`log::Log`] on top of a sink and a registry.
pub struct LogBridge {
    sink: Arc<LogSink>,
    registry: Arc<LevelRegistry>,
}

impl LogBridge {
    pub fn new(sink: Arc<LogSink>, registry: Arc<LevelRegistry>) -> Self {
        Self { sink, registry }
    }

    /// Install this bridge as the process-wide logger.
    ///
    /// The max level is opened up to `Trace`; filtering happens per target
    /// in the registry so individual loggers can be tightened at runtime.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_max_level(log::LevelFilter::Trace);
        log::set_boxed_logger(Box::new(self))
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Severity::from(metadata.level()) >= self.registry.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Embed the call site the same way location-aware macros do, so the
        // sink's payload parser can lift it back out into the source field.
        let payload = match (self.sink.captures_source(), record.file(), record.line()) {
            (true, Some(file), Some(line)) => {
                format!("[{}:{}] {}", file, line, record.args())
            }
            _ => record.args().to_string(),
        };

        self.sink.ingest(LogEvent {
            severity: record.level().into(),
            logger: record.target().to_string(),
            thread_id: current_thread_id(),
            timestamp: Local::now(),
            payload,
        });
    }

    fn flush(&self) {}
}
