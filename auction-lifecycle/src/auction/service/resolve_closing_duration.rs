use {
    super::Service,
    std::time::Duration,
    thiserror::Error,
};

const SECONDS_PER_MINUTE: u64 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("auction duration in minutes is not set")]
    Missing,
    #[error("invalid auction duration in minutes {value:?}, expected a positive integer")]
    Invalid { value: String },
}

/// Parses the raw "auction duration in minutes" setting. Blank counts as missing.
pub fn parse_closing_duration(raw: Option<&str>) -> Result<Duration, ConfigurationError> {
    let value = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(ConfigurationError::Missing)?;

    value
        .parse::<u64>()
        .ok()
        .filter(|minutes| *minutes > 0)
        .and_then(|minutes| minutes.checked_mul(SECONDS_PER_MINUTE))
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigurationError::Invalid {
            value: value.to_string(),
        })
}

impl Service {
    pub fn resolve_closing_duration(&self) -> Result<Duration, ConfigurationError> {
        let duration = parse_closing_duration(self.config.auction_duration_minutes.as_deref())?;
        tracing::debug!(duration = ?duration, "Resolved auction duration");
        Ok(duration)
    }
}
