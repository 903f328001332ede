use plume_logger::{LevelFilter, Logger};

#[test]
fn console_only_logger_has_no_file_guard() {
    let logger = Logger::builder()
        .name("plume-console-only")
        .console(true)
        .level(LevelFilter::WARN)
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none());
}
