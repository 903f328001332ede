use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// File stem probed when no explicit path is given (`plume.toml`, `plume.json`, ...).
pub const DEFAULT_CONFIG_STEM: &str = "plume";

/// Environment prefix for overrides (`PLUME__RENDER__SECTION_HEADERS=true`).
pub const ENV_PREFIX: &str = "PLUME";

#[plume_derive::plume_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader.
///
/// 1. **Base file**: an explicit `path` must exist. Without one, `plume.*` in the
///    working directory is used when present and skipped otherwise.
/// 2. **Environment**: variables prefixed `PLUME__` override file values; nested keys
///    use double underscores (`PLUME__LOGGING__LEVEL` maps to `logging.level`).
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing, a source cannot be
/// parsed, or the merged values do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            let p = p.as_ref().to_path_buf();
            info!("Loading config from {}", p.display());
            File::from(p.as_path()).required(true)
        },
        None => File::from(PathBuf::from(DEFAULT_CONFIG_STEM)).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
