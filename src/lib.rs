//! In-app log capture and viewer panel for egui applications.
//!
//! `loglens` captures structured log events from any number of producer
//! threads into a shared record store, separating metadata (time, thread,
//! level, logger, source location) from payload text and assigning
//! per-severity display colors at ingestion time. A host UI renders the
//! store once per frame through the [`LogPanel`] widget (or through its
//! own [`Surface`] implementation) with live filtering and format toggles
//! that never block producers.
//!
//! Typical wiring:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use loglens::{LevelRegistry, LogBridge, LogPanel, LogSink};
//!
//! let sink = Arc::new(LogSink::new());
//! let registry = Arc::new(LevelRegistry::default());
//! LogBridge::new(Arc::clone(&sink), Arc::clone(&registry))
//!     .install()
//!     .expect("no other logger installed");
//!
//! loglens::load_settings(
//!     &loglens::default_settings_path("my-app"),
//!     &sink,
//!     registry.as_ref(),
//! );
//!
//! let mut panel = LogPanel::new(sink, registry);
//! // each frame: panel.show(ctx, "Logs", &mut open);
//! ```

pub mod bridge;
pub mod error;
pub mod filter;
pub mod format;
pub mod panel;
pub mod policy;
pub mod record;
pub mod render;
pub mod settings;
pub mod severity;
pub mod sink;
pub mod source_location;
pub mod store;

pub use bridge::{LevelRegistry, LogBridge, LoggerRegistry, current_thread_id};
pub use error::SettingsError;
pub use filter::DisplayFilter;
pub use format::FormatSettings;
pub use panel::LogPanel;
pub use policy::PanelTheme;
pub use record::{Coloring, LogRecord, Rgba};
pub use render::{Span, Surface, render_records};
pub use settings::{default_settings_path, load_settings, save_settings};
pub use severity::Severity;
pub use sink::{LogEvent, LogSink};
pub use source_location::split_source_location;
pub use store::RecordStore;
