use crate::navigation::Route;
use once_cell::sync::Lazy;
use std::env;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_LOG_FILTER: &str = "ascendimed_frontend=debug";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ASCENDIMED_INITIAL_ROUTE must be `landing`, `onboarding` or `home`, got `{0}`")]
    InitialRoute(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub initial_route: Route,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_route: Route::Landing,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env_or_default);

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` but keeps defaults for invalid values.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            warn!("{}; using defaults", e);
            Self::default()
        })
    }

    /// Process-wide config, read once.
    pub fn global() -> &'static AppConfig {
        &CONFIG
    }

    /// Log filter only. Tools that never use a route must not fail on a bad one.
    pub fn log_filter_from_env() -> String {
        Self::log_filter_from_lookup(|key| env::var(key).ok())
    }

    pub fn log_filter_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> String {
        lookup("ASCENDIMED_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let initial_route = match lookup("ASCENDIMED_INITIAL_ROUTE") {
            None => Route::Landing,
            Some(raw) if raw.trim().is_empty() => Route::Landing,
            // Only the entry points make sense as a stack root.
            Some(raw) => match raw.parse::<Route>() {
                Ok(route @ (Route::Landing | Route::Onboarding | Route::Home)) => route,
                _ => return Err(ConfigError::InitialRoute(raw)),
            },
        };
        let log_filter = Self::log_filter_from_lookup(&lookup);
        Ok(Self {
            initial_route,
            log_filter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), Ok(AppConfig::default()));
    }

    #[test]
    fn reads_route_and_filter() {
        let config = AppConfig::from_lookup(lookup(&[
            ("ASCENDIMED_INITIAL_ROUTE", "Home"),
            ("ASCENDIMED_LOG", "ascendimed_frontend=trace"),
        ]))
        .unwrap();
        assert_eq!(config.initial_route, Route::Home);
        assert_eq!(config.log_filter, "ascendimed_frontend=trace");
    }

    #[test]
    fn rejects_unknown_route() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("ASCENDIMED_INITIAL_ROUTE", "settings")])),
            Err(ConfigError::InitialRoute("settings".to_string()))
        );
    }

    #[test]
    fn accepts_onboarding_as_entry_point() {
        let config =
            AppConfig::from_lookup(lookup(&[("ASCENDIMED_INITIAL_ROUTE", "onboarding")])).unwrap();
        assert_eq!(config.initial_route, Route::Onboarding);
    }

    #[test]
    fn log_filter_ignores_invalid_route() {
        let env = lookup(&[
            ("ASCENDIMED_INITIAL_ROUTE", "nowhere"),
            ("ASCENDIMED_LOG", "ascendimed_frontend=warn"),
        ]);
        assert!(AppConfig::from_lookup(&env).is_err());
        assert_eq!(AppConfig::log_filter_from_lookup(&env), "ascendimed_frontend=warn");
        assert_eq!(AppConfig::log_filter_from_lookup(lookup(&[])), DEFAULT_LOG_FILTER);
    }
}
