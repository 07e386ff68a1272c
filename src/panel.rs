//! egui widget drawing the toolbar and the scrolling record list.

use std::sync::Arc;

use crate::bridge::{LevelRegistry, LoggerRegistry};
use crate::filter::DisplayFilter;
use crate::record::{LogRecord, Rgba};
use crate::render::{Span, Surface};
use crate::severity::Severity;
use crate::sink::LogSink;

/// Log viewer panel: toolbar (levels, format, clear, wrap, scroll lock,
/// filter) above a scrolling list of captured records.
///
/// The panel owns only UI state (the filter text); records and format
/// settings live in the shared [`LogSink`], levels in the shared
/// [`LevelRegistry`], so the panel can be dropped and recreated freely.
pub struct LogPanel {
    sink: Arc<LogSink>,
    registry: Arc<LevelRegistry>,
    filter: DisplayFilter,
}

impl LogPanel {
    pub fn new(sink: Arc<LogSink>, registry: Arc<LevelRegistry>) -> Self {
        Self {
            sink,
            registry,
            filter: DisplayFilter::new(),
        }
    }

    /// Current display filter (mainly for tests and host-driven setups).
    pub fn filter(&self) -> &DisplayFilter {
        &self.filter
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter.set_text(text);
    }

    /// Draw the panel in its own window. `open` is cleared when the user
    /// closes it.
    pub fn show(&mut self, ctx: &egui::Context, title: &str, open: &mut bool) {
        egui::Window::new(title)
            .open(open)
            .default_size([500.0, 400.0])
            .resizable(true)
            .show(ctx, |ui| self.ui(ui));
    }

    /// Draw the panel into an existing container (docked usage).
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.toolbar(ui);
        ui.separator();
        self.record_list(ui);
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.menu_button("Levels", |ui| self.levels_menu(ui))
                .response
                .on_hover_text("Change the logging levels");

            ui.menu_button("Format", |ui| self.format_menu(ui))
                .response
                .on_hover_text("Choose what information to show");

            if ui
                .button("Clear")
                .on_hover_text("Discard all messages")
                .clicked()
            {
                self.sink.clear();
            }

            let format = self.sink.format_settings();
            if ui
                .selectable_label(format.soft_wrap, "Wrap")
                .on_hover_text("Toggle soft wraps")
                .clicked()
            {
                self.sink.update_format(|f| f.soft_wrap = !f.soft_wrap);
            }
            if ui
                .selectable_label(format.scroll_lock, "Scroll lock")
                .on_hover_text("Toggle automatic scrolling to the bottom")
                .clicked()
            {
                self.sink.update_format(|f| f.scroll_lock = !f.scroll_lock);
            }

            let mut text = self.filter.text().to_owned();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text("Filter (-exclude)")
                    .desired_width(140.0),
            );
            if response.changed() {
                self.filter.set_text(text);
            }
        });
    }

    fn levels_menu(&mut self, ui: &mut egui::Ui) {
        ui.label("Logging Levels");
        ui.separator();
        let loggers = self.registry.loggers();
        if loggers.is_empty() {
            ui.weak("No loggers registered yet");
            return;
        }
        for (name, level) in loggers {
            let mut index = level.index();
            let slider = egui::Slider::new(&mut index, 0..=6)
                .text(name.as_str())
                .custom_formatter(|value, _| {
                    match Severity::from_index(value as i64) {
                        Some(level) => format!("{} ({})", value as u8, level),
                        None => format!("{value}"),
                    }
                });
            if ui.add(slider).changed()
                && let Some(level) = Severity::from_index(index as i64)
            {
                self.registry.set_level(&name, level);
            }
        }
    }

    fn format_menu(&mut self, ui: &mut egui::Ui) {
        ui.label("Logging Format");
        ui.separator();
        let mut format = self.sink.format_settings();
        let mut changed = false;
        ui.horizontal(|ui| {
            changed |= ui.checkbox(&mut format.show_time, "Time").changed();
            changed |= ui.checkbox(&mut format.show_thread, "Thread").changed();
            changed |= ui.checkbox(&mut format.show_level, "Level").changed();
            changed |= ui.checkbox(&mut format.show_logger, "Logger").changed();
        });
        if changed {
            self.sink.update_format(|f| *f = format);
        }
    }

    fn record_list(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 1.0;
                let mut surface = EguiSurface { ui: &mut *ui };
                let scroll_to_bottom = self.sink.render(&self.filter, &mut surface);
                if scroll_to_bottom {
                    ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                }
            });
    }
}

struct EguiSurface<'a> {
    ui: &'a mut egui::Ui,
}

impl Surface for EguiSurface<'_> {
    fn draw_record(&mut self, record: &LogRecord, spans: &[Span<'_>]) {
        let response = self
            .ui
            .horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;
                for span in spans {
                    let mut text = egui::RichText::new(span.text).monospace();
                    if let Some(color) = span.color {
                        text = text.color(color32(color));
                    }
                    if span.emphasis {
                        text = text.strong();
                    }
                    let label = egui::Label::new(text);
                    let label = if span.wrap {
                        label.wrap()
                    } else {
                        label.extend()
                    };
                    ui.add(label);
                }
            })
            .response;

        if !record.source.is_empty() {
            response.on_hover_text(record.source.as_str());
        }
    }
}

fn color32(color: Rgba) -> egui::Color32 {
    let [r, g, b, a] = color.0;
    egui::Rgba::from_rgba_unmultiplied(r, g, b, a).into()
}
