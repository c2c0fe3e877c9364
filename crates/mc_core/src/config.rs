//! Runtime configuration from environment variables
//!
//! All values have safe defaults; an unparseable value falls back to the
//! default with a warning instead of failing startup.

use std::env;

pub const FEED_CAP_ENV: &str = "MC_FEED_CAP";
pub const REFRESH_SECS_ENV: &str = "MC_REFRESH_SECS";
pub const EVENT_SECS_ENV: &str = "MC_EVENT_SECS";
pub const RNG_SEED_ENV: &str = "MC_RNG_SEED";

pub const DEFAULT_FEED_CAP: usize = 20;
pub const DEFAULT_REFRESH_SECS: u64 = 30;
pub const DEFAULT_EVENT_SECS: u64 = 8;

/// Dashboard runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Maximum number of events retained in the live feed.
    pub feed_cap: usize,
    /// Seconds between full lifecycle refreshes.
    pub refresh_secs: u64,
    /// Seconds between live-event appensions.
    pub event_secs: u64,
    /// Fixed RNG seed for reproducible runs. `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            feed_cap: DEFAULT_FEED_CAP,
            refresh_secs: DEFAULT_REFRESH_SECS,
            event_secs: DEFAULT_EVENT_SECS,
            rng_seed: None,
        }
    }
}

impl DashboardConfig {
    /// Read configuration from the environment, falling back per field.
    pub fn from_env() -> Self {
        Self {
            feed_cap: parse_env(FEED_CAP_ENV, DEFAULT_FEED_CAP),
            refresh_secs: parse_env(REFRESH_SECS_ENV, DEFAULT_REFRESH_SECS),
            event_secs: parse_env(EVENT_SECS_ENV, DEFAULT_EVENT_SECS),
            rng_seed: parse_env_opt(RNG_SEED_ENV),
        }
    }
}

fn parse_env<T: std::str::FromStr + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Ignoring invalid {}='{}', using default", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}

fn parse_env_opt<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring invalid {}='{}'", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.feed_cap, 20);
        assert_eq!(config.refresh_secs, 30);
        assert_eq!(config.event_secs, 8);
        assert!(config.rng_seed.is_none());
    }

    #[test]
    fn test_invalid_env_falls_back_to_default() {
        // Unset keys and bad values must both yield defaults
        std::env::remove_var(FEED_CAP_ENV);
        assert_eq!(parse_env(FEED_CAP_ENV, DEFAULT_FEED_CAP), DEFAULT_FEED_CAP);

        std::env::set_var(FEED_CAP_ENV, "not-a-number");
        assert_eq!(parse_env(FEED_CAP_ENV, DEFAULT_FEED_CAP), DEFAULT_FEED_CAP);
        std::env::remove_var(FEED_CAP_ENV);
    }

    #[test]
    fn test_seed_parsed_when_present() {
        std::env::set_var(RNG_SEED_ENV, "42");
        assert_eq!(parse_env_opt::<u64>(RNG_SEED_ENV), Some(42));
        std::env::remove_var(RNG_SEED_ENV);
    }
}
