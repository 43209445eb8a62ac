//! Application state for the paycheck calculator API.

use std::sync::Arc;

use crate::config::Configuration;

/// Shared application state.
///
/// Holds the configuration resolved once at startup; every request is
/// calculated against it.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Configuration>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: Configuration) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the effective configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_configuration() {
        let state = AppState::new(Configuration::default());
        let clone = state.clone();
        assert!(std::ptr::eq(state.config(), clone.config()));
    }
}
