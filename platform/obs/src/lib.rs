use anyhow::{Result, anyhow};
use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: OnceCell<()> = OnceCell::new();

const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn,sea_orm_migration=warn";

/// Configuration for tracing initialization.
#[derive(Clone, Debug, Default)]
pub struct ObsConfig {
    /// Directive string; falls back to `RUST_LOG`, then a quiet default that
    /// keeps sqlx and sea-orm at `warn`.
    pub env_filter: Option<String>,
    pub ansi: bool,
}

impl ObsConfig {
    fn filter(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }
}

/// Install the fmt subscriber. Logs go to stderr so stdout stays clean for
/// command output. Calling this more than once is a no-op.
pub fn init_tracing(config: ObsConfig) -> Result<()> {
    if INIT.get().is_some() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_new(config.filter())?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(config.ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    INIT.set(())
        .map_err(|_| anyhow!("tracing already initialized"))?;
    tracing::debug!("tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = ObsConfig {
            env_filter: Some("debug".into()),
            ansi: false,
        };
        assert_eq!(config.filter(), "debug");
    }

    #[test]
    fn init_is_idempotent() {
        let config = ObsConfig {
            env_filter: Some("warn".into()),
            ansi: false,
        };
        init_tracing(config.clone()).unwrap();
        init_tracing(config).unwrap();
    }
}
