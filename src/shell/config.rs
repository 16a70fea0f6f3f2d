use anyhow::{Context, bail};
use std::time::Duration;

pub const DEFAULT_COST_RECALCULATION_PERIOD_SECS: u64 = 60;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub cost_recalculation_period: Duration,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cost_recalculation_period: Duration::from_secs(DEFAULT_COST_RECALCULATION_PERIOD_SECS),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests do not touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup("COST_RECALCULATION_PERIOD_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("COST_RECALCULATION_PERIOD_SECS is not a number: {raw}"))?;
            if secs == 0 {
                bail!("COST_RECALCULATION_PERIOD_SECS must be greater than zero");
            }
            config.cost_recalculation_period = Duration::from_secs(secs);
        }
        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        Ok(config)
    }
}
