use chrono::Duration;
use shared::session::DEFAULT_SESSION_MAX_AGE_SECS;

/// Runtime configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    /// Port the server listens on.
    pub port: u16,

    /// Session (and session cookie) lifetime.
    pub session_max_age: Duration,

    /// Whether session expiry slides on access or is fixed at creation.
    pub sliding_expiration: bool,

    /// How often the expiry sweep runs.
    pub sweep_interval: std::time::Duration,
}

impl Config {
    /// Loads the configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: env_or("PORT", 3000),
            session_max_age: Duration::seconds(env_or(
                "SESSION_MAX_AGE_SECS",
                DEFAULT_SESSION_MAX_AGE_SECS,
            )),
            sliding_expiration: env_or("SESSION_SLIDING", false),
            sweep_interval: std::time::Duration::from_secs(env_or(
                "SESSION_SWEEP_INTERVAL_SECS",
                60,
            )),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            session_max_age: Duration::seconds(DEFAULT_SESSION_MAX_AGE_SECS),
            sliding_expiration: false,
            sweep_interval: std::time::Duration::from_secs(60),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
