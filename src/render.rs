//! Span emission: turning filtered records into styled text runs.
//!
//! The render pass owns no drawing code. It derives, per surviving record,
//! a flat list of [`Span`]s and hands them to a [`Surface`], the seam
//! between the capture pipeline and whatever actually rasterizes text
//! (the egui panel in this crate, a recording stub in tests).

use std::sync::Arc;

use crate::filter::DisplayFilter;
use crate::record::{Coloring, LogRecord, Rgba};

/// One styled run of text within a record's display line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span<'a> {
    pub text: &'a str,
    /// Severity color, or `None` for the default text style.
    pub color: Option<Rgba>,
    pub emphasis: bool,
    /// Whether this span may soft-wrap (only ever set on the message span).
    pub wrap: bool,
}

impl<'a> Span<'a> {
    fn plain(text: &'a str, emphasis: bool) -> Self {
        Span {
            text,
            color: None,
            emphasis,
            wrap: false,
        }
    }

    fn colored(text: &'a str, color: Rgba, emphasis: bool) -> Self {
        Span {
            text,
            color: Some(color),
            emphasis,
            wrap: false,
        }
    }
}

/// A display region that can draw one record as a sequence of styled spans.
pub trait Surface {
    fn draw_record(&mut self, record: &LogRecord, spans: &[Span<'_>]);
}

/// Emit every record passing `filter`, in insertion order.
///
/// Works over an already-taken snapshot: the store lock is not held here,
/// and records appended mid-pass belong to the next frame.
pub fn render_records(
    records: &[Arc<LogRecord>],
    filter: &DisplayFilter,
    soft_wrap: bool,
    surface: &mut dyn Surface,
) {
    for record in records {
        if !filter.matches(record) {
            continue;
        }
        emit_record(record, soft_wrap, surface);
    }
}

fn emit_record(record: &LogRecord, soft_wrap: bool, surface: &mut dyn Surface) {
    let mut spans: Vec<Span<'_>> = Vec::with_capacity(4);
    let emphasis = record.emphasis;

    match record.coloring {
        Coloring::Properties { start, end } => {
            // The range was validated at construction: splitting cannot
            // leave the string or a char boundary.
            let (before, rest) = record.properties.split_at(start);
            let (middle, after) = rest.split_at(end - start);
            if !before.is_empty() {
                spans.push(Span::plain(before, emphasis));
            }
            spans.push(Span::colored(middle, record.color, emphasis));
            if !after.is_empty() {
                spans.push(Span::plain(after, emphasis));
            }
            spans.push(Span::plain(&record.message, emphasis));
        }
        Coloring::WholeMessage => {
            if !record.properties.is_empty() {
                spans.push(Span::colored(&record.properties, record.color, emphasis));
            }
            spans.push(Span::colored(&record.message, record.color, emphasis));
        }
        Coloring::None => {
            if !record.properties.is_empty() {
                spans.push(Span::plain(&record.properties, emphasis));
            }
            spans.push(Span::plain(&record.message, emphasis));
        }
    }

    if soft_wrap && let Some(message_span) = spans.last_mut() {
        message_span.wrap = true;
    }

    surface.draw_record(record, &spans);
}
