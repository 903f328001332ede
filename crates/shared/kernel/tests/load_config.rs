use plume_domain::config::PlumeConfig;
use plume_kernel::config::{ConfigError, load_config};
use std::fs;
use tempfile::tempdir;

#[test]
fn explicit_toml_file_is_merged_over_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let path = tmp.path().join("plume.toml");
    fs::write(&path, "[render]\nsection_headers = true\n\n[logging]\nlevel = \"debug\"\n")?;

    let cfg: PlumeConfig = load_config(Some(&path))?;
    assert!(cfg.render.section_headers);
    assert!(cfg.render.trailing_newline);
    assert_eq!(cfg.logging.level, "debug");
    Ok(())
}

#[test]
fn missing_explicit_file_is_an_error() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("absent.toml");

    let err = load_config::<PlumeConfig>(Some(&path)).expect_err("file does not exist");
    assert!(matches!(err, ConfigError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn malformed_values_fail_deserialization() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let path = tmp.path().join("plume.toml");
    fs::write(&path, "[render]\nsection_headers = \"sometimes\"\n")?;

    let err = load_config::<PlumeConfig>(Some(&path)).expect_err("not a boolean");
    assert!(err.to_string().contains("Failed to deserialize config"));
    Ok(())
}
