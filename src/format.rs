//! Display format toggles for the log panel.

/// Which metadata columns are rendered, plus the two viewer toggles.
///
/// All fields are independently togglable. The sink keeps the current
/// value behind an `ArcSwap`, so producers building a properties prefix
/// read one immutable snapshot per event and never observe a half-applied
/// toggle; mutation happens on the UI thread via
/// [`LogSink::update_format`](crate::sink::LogSink::update_format).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSettings {
    pub show_time: bool,
    pub show_thread: bool,
    pub show_level: bool,
    pub show_logger: bool,
    /// Soft-wrap long messages in the viewer.
    pub soft_wrap: bool,
    /// Suppress automatic scrolling to the newest record.
    pub scroll_lock: bool,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            show_time: true,
            show_thread: true,
            show_level: true,
            show_logger: true,
            soft_wrap: true,
            scroll_lock: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let format = FormatSettings::default();
        assert!(format.show_time);
        assert!(format.show_thread);
        assert!(format.show_level);
        assert!(format.show_logger);
        assert!(format.soft_wrap);
        assert!(!format.scroll_lock);
    }
}
