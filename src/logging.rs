//! src/logging.rs
//!
//! Logger setup. The terminal belongs to the UI, so records go to a file.

use std::fs::File;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use log::LevelFilter;

/// Log from info level and above unless overridden.
/// If RUST_LOG is set it takes precedence over `override_log_level`.
pub fn init_logger(override_log_level: Option<LevelFilter>, path: &Path) -> color_eyre::Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("cannot create log file {}", path.display()))?;

    let mut builder = env_logger::Builder::new();
    if std::env::var_os("RUST_LOG").is_some() {
        builder.parse_default_env();
    } else {
        builder.filter_level(override_log_level.unwrap_or(LevelFilter::Info));
    }
    builder
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .wrap_err("logger already initialised")?;
    Ok(())
}
