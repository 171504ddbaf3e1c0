//! Diagnostic logging.  The terminal belongs to the game while it runs, so
//! log messages can only go to a file.
use crate::config::LoggingConfig;
use crate::consts;
use anyhow::Context;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a global `tracing` subscriber that appends to the configured log
/// file.  Does nothing if no log file is configured.
pub(crate) fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let Some(path) = config.file.as_deref() else {
        return Ok(());
    };
    let directive = std::env::var(consts::LOG_ENV_VAR)
        .ok()
        .filter(|s| !s.trim().is_empty());
    let filter = make_filter(directive.as_deref(), &config.level)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log directory")?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}

/// Build a log filter from the environment's directive if set, otherwise
/// from the configured level
fn make_filter(env_directive: Option<&str>, level: &str) -> anyhow::Result<EnvFilter> {
    match env_directive {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid {} value {directive:?}", consts::LOG_ENV_VAR)),
        None => EnvFilter::try_new(level)
            .with_context(|| format!("invalid logging.level value {level:?}")),
    }
}
