//! Per-severity display colors and emphasis.

use crate::record::{Coloring, Rgba};
use crate::severity::Severity;

/// Colors used when rendering log records.
///
/// Defaults match a dark UI theme: low severities reuse the regular text
/// colors, warnings go amber, errors red.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelTheme {
    /// Dimmed text, used for trace output.
    pub muted: Rgba,
    /// Regular text color.
    pub text: Rgba,
    /// Accent color, used for the info level tag.
    pub highlight: Rgba,
    /// Warning amber.
    pub warn: Rgba,
    /// Error red, shared by error and critical.
    pub error: Rgba,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            muted: Rgba::rgb(0.5, 0.5, 0.5),
            text: Rgba::rgb(1.0, 1.0, 1.0),
            highlight: Rgba::rgb(0.26, 0.59, 0.98),
            warn: Rgba::rgb(0.9, 0.7, 0.0),
            error: Rgba::rgb(1.0, 0.0, 0.0),
        }
    }
}

impl PanelTheme {
    /// Resolve the display styling for one event.
    ///
    /// `level_range` is the byte range of the level tag inside the
    /// properties prefix, when that tag was rendered. Debug and info color
    /// only that tag and fall back to no coloring when the tag is hidden.
    /// Trace, warn, error and critical color the whole message regardless
    /// of which metadata columns are visible.
    ///
    /// A range starting at byte 0 (the level tag is the first visible
    /// column) cannot be expressed as a properties sub-range and also falls
    /// back to no coloring.
    pub fn styling_for(
        &self,
        severity: Severity,
        level_range: Option<(usize, usize)>,
    ) -> (Rgba, Coloring, bool) {
        let level_tag = level_range
            .filter(|(start, _)| *start > 0)
            .map(|(start, end)| Coloring::Properties { start, end })
            .unwrap_or(Coloring::None);

        match severity {
            Severity::Trace => (self.muted, Coloring::WholeMessage, false),
            Severity::Debug => (self.text, level_tag, false),
            Severity::Info => (self.highlight, level_tag, false),
            Severity::Warn => (self.warn, Coloring::WholeMessage, false),
            Severity::Error => (self.error, Coloring::WholeMessage, false),
            Severity::Critical => (self.error, Coloring::WholeMessage, true),
            // Never ingested in practice; render plain instead of guessing.
            Severity::Off => (self.text, Coloring::None, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_always_colors_whole_message() {
        let theme = PanelTheme::default();
        for level_range in [None, Some((5, 9))] {
            let (color, coloring, emphasis) = theme.styling_for(Severity::Warn, level_range);
            assert_eq!(coloring, Coloring::WholeMessage);
            assert_eq!(color, theme.warn);
            assert!(!emphasis);
        }
    }

    #[test]
    fn test_debug_colors_level_tag_when_rendered() {
        let theme = PanelTheme::default();
        let (_, coloring, _) = theme.styling_for(Severity::Debug, Some((12, 16)));
        assert_eq!(coloring, Coloring::Properties { start: 12, end: 16 });
    }

    #[test]
    fn test_debug_without_level_tag_is_plain() {
        let theme = PanelTheme::default();
        let (_, coloring, _) = theme.styling_for(Severity::Debug, None);
        assert_eq!(coloring, Coloring::None);
    }

    #[test]
    fn test_leading_level_tag_cannot_be_sub_ranged() {
        let theme = PanelTheme::default();
        let (_, coloring, _) = theme.styling_for(Severity::Info, Some((0, 4)));
        assert_eq!(coloring, Coloring::None);
    }

    #[test]
    fn test_critical_is_emphasized_error_red() {
        let theme = PanelTheme::default();
        let (color, coloring, emphasis) = theme.styling_for(Severity::Critical, None);
        assert_eq!(color, theme.error);
        assert_eq!(coloring, Coloring::WholeMessage);
        assert!(emphasis);
    }

    #[test]
    fn test_trace_is_muted() {
        let theme = PanelTheme::default();
        let (color, coloring, _) = theme.styling_for(Severity::Trace, Some((3, 7)));
        assert_eq!(color, theme.muted);
        assert_eq!(coloring, Coloring::WholeMessage);
    }
}
