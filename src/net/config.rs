//! Process-wide API configuration and request-URL construction.
//!
//! DESIGN
//! ======
//! The base URL is captured once from the build environment and never
//! mutated afterwards; every request URL is derived from it through
//! [`ApiConfig::build_url`]. Callers receive the config through context
//! rather than reading ambient globals themselves.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Immutable API origin configuration, created once at startup.
///
/// An empty base URL means same-origin deployment: built URLs stay
/// relative and the browser resolves them against the current origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Capture the API origin from the `STOREFRONT_API_URL` build-time
    /// environment variable, falling back to same-origin when unset.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("STOREFRONT_API_URL").unwrap_or(""))
    }

    /// Create a config with an explicit base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.to_owned() }
    }

    /// Join the configured base with `endpoint`.
    ///
    /// The endpoint gains a leading `/` when missing and the base loses
    /// one trailing `/` when present, so the junction carries exactly one
    /// separator. The endpoint is passed through without validation or
    /// percent-encoding.
    #[must_use]
    pub fn build_url(&self, endpoint: &str) -> String {
        let base = self.base_url.strip_suffix('/').unwrap_or(&self.base_url);
        if endpoint.starts_with('/') {
            format!("{base}{endpoint}")
        } else {
            format!("{base}/{endpoint}")
        }
    }
}
