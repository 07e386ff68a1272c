use loglens::{
    LevelRegistry, LogSink, LoggerRegistry, Severity, default_settings_path, load_settings,
    save_settings,
};

#[test]
fn test_settings_round_trip_into_fresh_sink() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log_settings.toml");

    let sink = LogSink::new();
    sink.update_format(|f| {
        f.show_time = false;
        f.show_logger = false;
        f.soft_wrap = false;
        f.scroll_lock = true;
    });
    let registry = LevelRegistry::default();
    registry.set_level("net", Severity::Warn);
    registry.set_level("db", Severity::Trace);
    registry.set_level("ui", Severity::Off);
    save_settings(&path, &sink, &registry).unwrap();

    let fresh_sink = LogSink::new();
    let fresh_registry = LevelRegistry::default();
    load_settings(&path, &fresh_sink, &fresh_registry);

    assert_eq!(fresh_sink.format_settings(), sink.format_settings());
    assert_eq!(fresh_registry.loggers(), registry.loggers());
}

#[test]
fn test_save_overwrites_previous_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log_settings.toml");

    let sink = LogSink::new();
    let registry = LevelRegistry::default();
    registry.set_level("old", Severity::Error);
    save_settings(&path, &sink, &registry).unwrap();

    let replacement = LevelRegistry::default();
    replacement.set_level("new", Severity::Debug);
    save_settings(&path, &sink, &replacement).unwrap();

    let fresh = LevelRegistry::default();
    load_settings(&path, &LogSink::new(), &fresh);
    assert_eq!(fresh.loggers(), vec![("new".to_string(), Severity::Debug)]);
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("log_settings.toml");

    save_settings(&path, &LogSink::new(), &LevelRegistry::default()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_default_path_shape() {
    let path = default_settings_path("my-app");
    assert!(path.ends_with("my-app/log_settings.toml"));
}
