use plume_domain::config::{LoggingConfig, PlumeConfig, RenderConfig};
use serde_json::json;

#[test]
fn defaults_match_the_plain_namelist_layout() {
    let render = RenderConfig::default();
    assert!(!render.section_headers);
    assert!(render.trailing_newline);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.path.is_none());
    assert_eq!(logging.max_files, 10);
}

#[test]
fn partial_tables_fall_back_to_defaults() {
    let raw = json!({
        "render": { "section_headers": true },
        "logging": { "level": "debug", "path": "/tmp/plume-logs" }
    });

    let cfg: PlumeConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!(cfg.render.section_headers);
    assert!(cfg.render.trailing_newline);
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.path, Some(std::path::PathBuf::from("/tmp/plume-logs")));
    assert!(cfg.logging.console);
}

#[test]
fn clones_share_until_mutated() {
    let original = PlumeConfig::default();
    let mut edited = original.clone();
    edited.render.section_headers = true;

    assert!(!original.render.section_headers);
    assert!(edited.render.section_headers);
}
