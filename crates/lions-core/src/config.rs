//! Map provider configuration.
//!
//! A single environment-supplied credential controls whether map views
//! activate at all. Absence is a supported, non-fatal state: pages degrade to
//! a visible placeholder while timelines and filters keep working.

/// Primary environment variable for the map access token.
pub const TOKEN_ENV: &str = "LIONS_MAP_TOKEN";

/// Fallback environment variable, matching the provider's conventional name.
pub const TOKEN_ENV_FALLBACK: &str = "MAPBOX_ACCESS_TOKEN";

/// Map provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapConfig {
    token: Option<String>,
}

impl MapConfig {
    /// Read the token from the environment. Blank values count as absent.
    pub fn from_env() -> Self {
        let token = std::env::var(TOKEN_ENV)
            .or_else(|_| std::env::var(TOKEN_ENV_FALLBACK))
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        if token.is_none() {
            tracing::info!("No map token configured; map views will render placeholders");
        }
        Self { token }
    }

    /// Configuration with an explicit token (e.g. from a CLI flag).
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim().to_string();
        Self {
            token: (!token.is_empty()).then_some(token),
        }
    }

    /// Configuration with maps switched off.
    pub fn disabled() -> Self {
        Self { token: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
