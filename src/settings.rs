//! Persistence of viewer settings and logger levels.
//!
//! The settings document is TOML: top-level `scroll-lock` / `soft-wrap`
//! booleans, a `[format]` table with the four metadata-column toggles, and
//! a `[[loggers]]` array of `{ name, level }` entries. Every section and
//! key is individually optional on load, so a partially written or hand
//! edited file applies what it has and warns about the rest.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bridge::LoggerRegistry;
use crate::error::SettingsError;
use crate::severity::Severity;
use crate::sink::LogSink;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct SettingsDoc {
    scroll_lock: Option<bool>,
    soft_wrap: Option<bool>,
    loggers: Option<Vec<LoggerEntry>>,
    format: Option<FormatDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LoggerEntry {
    name: String,
    /// Severity index, 0 (trace) through 6 (off).
    level: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct FormatDoc {
    show_time: Option<bool>,
    show_thread: Option<bool>,
    show_level: Option<bool>,
    show_logger: Option<bool>,
}

/// Default document location: `<config dir>/<app>/log_settings.toml`.
pub fn default_settings_path(app: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(app)
        .join("log_settings.toml")
}

/// Load settings from `path` into the sink and registry.
///
/// Never fails: a missing file keeps the defaults (informational log), a
/// file that does not parse keeps the defaults (error log), and each
/// missing section or key keeps its prior in-memory value with an
/// individual warning. A corrupt settings file must never be fatal to
/// logging.
pub fn load_settings(path: &Path, sink: &LogSink, registry: &dyn LoggerRegistry) {
    if !path.exists() {
        log::info!("log settings file {} does not exist", path.display());
        return;
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("failed to read log settings {}: {}", path.display(), e);
            return;
        }
    };
    let doc: SettingsDoc = match toml::from_str(&contents) {
        Ok(doc) => doc,
        Err(e) => {
            log::error!("failed to parse log settings {}: {}", path.display(), e);
            return;
        }
    };
    log::info!("log settings loaded from {}", path.display());

    sanity_checks(&doc);
    apply(&doc, sink, registry);
}

/// Warn about every missing section/key, mirroring what `apply` will skip.
fn sanity_checks(doc: &SettingsDoc) {
    if doc.loggers.is_none() {
        log::warn!("missing 'loggers' in log settings");
    }
    match &doc.format {
        None => log::warn!("missing 'format' in log settings"),
        Some(format) => {
            if format.show_time.is_none() {
                log::warn!("missing 'format.show-time' in log settings");
            }
            if format.show_thread.is_none() {
                log::warn!("missing 'format.show-thread' in log settings");
            }
            if format.show_level.is_none() {
                log::warn!("missing 'format.show-level' in log settings");
            }
            if format.show_logger.is_none() {
                log::warn!("missing 'format.show-logger' in log settings");
            }
        }
    }
    if doc.scroll_lock.is_none() {
        log::warn!("missing 'scroll-lock' in log settings");
    }
    if doc.soft_wrap.is_none() {
        log::warn!("missing 'soft-wrap' in log settings");
    }
}

fn apply(doc: &SettingsDoc, sink: &LogSink, registry: &dyn LoggerRegistry) {
    if let Some(loggers) = &doc.loggers {
        for entry in loggers {
            match Severity::from_index(entry.level) {
                Some(level) => {
                    log::debug!("logger '{}' will have level '{}'", entry.name, level);
                    registry.set_level(&entry.name, level);
                }
                None => {
                    log::warn!(
                        "logger '{}' has out-of-range level {} in log settings",
                        entry.name,
                        entry.level
                    );
                }
            }
        }
    }

    sink.update_format(|format| {
        if let Some(doc_format) = &doc.format {
            if let Some(show_time) = doc_format.show_time {
                format.show_time = show_time;
            }
            if let Some(show_thread) = doc_format.show_thread {
                format.show_thread = show_thread;
            }
            if let Some(show_level) = doc_format.show_level {
                format.show_level = show_level;
            }
            if let Some(show_logger) = doc_format.show_logger {
                format.show_logger = show_logger;
            }
        }
        if let Some(scroll_lock) = doc.scroll_lock {
            format.scroll_lock = scroll_lock;
        }
        if let Some(soft_wrap) = doc.soft_wrap {
            format.soft_wrap = soft_wrap;
        }
    });
}

/// Serialize the current format settings and the full logger table to
/// `path`, overwriting whatever is there. Parent directories are created
/// as needed.
pub fn save_settings(
    path: &Path,
    sink: &LogSink,
    registry: &dyn LoggerRegistry,
) -> Result<(), SettingsError> {
    let format = sink.format_settings();
    let doc = SettingsDoc {
        scroll_lock: Some(format.scroll_lock),
        soft_wrap: Some(format.soft_wrap),
        loggers: Some(
            registry
                .loggers()
                .into_iter()
                .map(|(name, level)| LoggerEntry {
                    name,
                    level: level.index() as i64,
                })
                .collect(),
        ),
        format: Some(FormatDoc {
            show_time: Some(format.show_time),
            show_thread: Some(format.show_thread),
            show_level: Some(format.show_level),
            show_logger: Some(format.show_logger),
        }),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = toml::to_string_pretty(&doc)?;
    fs::write(path, format!("# Logging configuration\n{body}"))?;
    log::debug!("log settings saved to {}", path.display());
    Ok(())
}
