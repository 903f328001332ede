use plume_domain::config::LoggingConfig;
use plume_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn config_with_path_writes_json_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let log_dir = tmp.path().join("logs");

    let config = LoggingConfig {
        level: "debug".to_owned(),
        console: false,
        json: true,
        path: Some(log_dir.clone()),
        ..LoggingConfig::default()
    };

    let logger = Logger::from_config("plume-file-logging", &config)?;
    assert!(logger.guard().is_some());

    tracing::info!(section = "GRID", "rendered section");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    assert!(contents.contains("\"section\":\"GRID\""), "json record expected, got {contents}");
    Ok(())
}
