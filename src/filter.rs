//! Live-editable text filter over captured records.

use crate::record::LogRecord;

/// Include/exclude text filter applied during each render pass.
///
/// The filter text is a comma-separated list of terms. A term starting
/// with `-` excludes lines containing it; any other term includes lines
/// containing it. Matching is case-insensitive substring matching. An
/// empty filter is inactive and passes everything.
///
/// A record passes when any of its three text fields (properties, source,
/// message) passes on its own: a field fails if an exclude term matches
/// it, and otherwise passes if there are no include terms or at least one
/// include term matches.
///
/// Nothing is cached per record; the filter is re-evaluated over the
/// snapshot every pass so edits take effect on the very next frame.
#[derive(Debug, Clone, Default)]
pub struct DisplayFilter {
    text: String,
    terms: Vec<Term>,
}

#[derive(Debug, Clone)]
struct Term {
    /// Lowercase needle.
    needle: String,
    exclude: bool,
}

impl DisplayFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current filter text, as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the filter text and re-parse the terms.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.terms = self
            .text
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty() && *term != "-")
            .map(|term| match term.strip_prefix('-') {
                Some(needle) => Term {
                    needle: needle.to_lowercase(),
                    exclude: true,
                },
                None => Term {
                    needle: term.to_lowercase(),
                    exclude: false,
                },
            })
            .collect();
    }

    /// Whether any terms are in effect.
    pub fn is_active(&self) -> bool {
        !self.terms.is_empty()
    }

    /// Whether `record` should be displayed.
    pub fn matches(&self, record: &LogRecord) -> bool {
        if !self.is_active() {
            return true;
        }
        self.passes(&record.properties)
            || self.passes(&record.source)
            || self.passes(&record.message)
    }

    fn passes(&self, field: &str) -> bool {
        let haystack = field.to_lowercase();
        let mut has_includes = false;
        let mut included = false;
        for term in &self.terms {
            if term.exclude {
                if haystack.contains(&term.needle) {
                    return false;
                }
            } else {
                has_includes = true;
                included |= haystack.contains(&term.needle);
            }
        }
        !has_includes || included
    }
}
