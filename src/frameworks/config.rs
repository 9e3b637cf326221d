use std::env;
use std::time::Duration;

use crate::use_cases::issue_token::DEFAULT_LIFETIME_SECONDS;

// Environment-backed settings for the attendance token service.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub token_secret: String,
    pub token_lifetime_seconds: u64,
    pub refresh_interval_seconds: u64,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        Ok(ServiceConfig {
            token_secret: env::var("ATTENDANCE_TOKEN_SECRET")?,
            token_lifetime_seconds: seconds_from_env(
                "ATTENDANCE_TOKEN_LIFETIME_SECONDS",
                DEFAULT_LIFETIME_SECONDS,
            ),
            refresh_interval_seconds: seconds_from_env(
                "ATTENDANCE_TOKEN_REFRESH_SECONDS",
                DEFAULT_LIFETIME_SECONDS,
            ),
        })
    }

    pub fn token_lifetime(&self) -> Duration {
        Duration::from_secs(self.token_lifetime_seconds)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_seconds)
    }
}

// Unparsable or zero values fall back to the default.
fn seconds_from_env(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|seconds| *seconds > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_config_is_built_then_duration_accessors_match_the_fields() {
        let config = ServiceConfig {
            token_secret: "secret".to_string(),
            token_lifetime_seconds: 300,
            refresh_interval_seconds: 120,
        };

        assert_eq!(config.token_lifetime(), Duration::from_secs(300));
        assert_eq!(config.refresh_interval(), Duration::from_secs(120));
    }
}
