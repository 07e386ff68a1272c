//! Typed error variants for settings persistence.

use thiserror::Error;

/// Errors produced when saving the log settings document.
///
/// Loading has no error surface at all: a missing file, a file that fails
/// to parse, and individual missing keys are each logged and the in-memory
/// defaults stay in effect, because a broken settings file must never take
/// logging down with it.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred reading or writing the settings file.
    #[error("I/O error accessing log settings: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file contained TOML that could not be parsed.
    #[error("TOML parse error in log settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// The in-memory settings could not be serialized to TOML.
    #[error("failed to serialize log settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
