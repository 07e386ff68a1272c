//! Ordered log severity levels.
//!
//! Severities follow the conventional trace-to-critical ordering, with an
//! extra `Off` value used as a threshold that silences a logger entirely.
//! The settings file stores levels as their integer index (0 = trace,
//! 6 = off), so the index mapping is part of the persisted format.

use std::fmt;

/// Log severity, ordered from least to most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
    /// Threshold-only value: a logger set to `Off` emits nothing.
    /// Events themselves are never produced at this level.
    Off,
}

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 7] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Critical,
        Severity::Off,
    ];

    /// Integer index used by the settings file and the level sliders.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Severity::index`]. Returns `None` for out-of-range values.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Severity::Trace),
            1 => Some(Severity::Debug),
            2 => Some(Severity::Info),
            3 => Some(Severity::Warn),
            4 => Some(Severity::Error),
            5 => Some(Severity::Critical),
            6 => Some(Severity::Off),
            _ => None,
        }
    }

    /// Single-letter code used in the rendered metadata prefix.
    pub const fn short_code(self) -> &'static str {
        match self {
            Severity::Trace => "T",
            Severity::Debug => "D",
            Severity::Info => "I",
            Severity::Warn => "W",
            Severity::Error => "E",
            Severity::Critical => "C",
            Severity::Off => "O",
        }
    }

    /// Lowercase name, as shown next to the level sliders.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Critical => "critical",
            Severity::Off => "off",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Severity::Trace,
            log::Level::Debug => Severity::Debug,
            log::Level::Info => Severity::Info,
            log::Level::Warn => Severity::Warn,
            log::Level::Error => Severity::Error,
        }
    }
}
