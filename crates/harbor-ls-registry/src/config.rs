//! Configuration types for registry client.

use std::time::Duration;

use crate::error::RegistryError;

/// Configuration for the registry client.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Registry as given by the user (host name or base URL).
    pub registry: String,

    /// Base URL requests are issued against (e.g., "<https://harbor.example.com>").
    pub base_url: String,

    /// Basic authentication credentials.
    pub credentials: Option<Credentials>,

    /// Request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,

    /// User agent string.
    pub user_agent: String,
}

impl RegistryConfig {
    /// Creates a new registry configuration.
    ///
    /// A bare host name is reached over HTTPS; a value that already carries a
    /// scheme is used as the base URL as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use harbor_ls_registry::RegistryConfig;
    ///
    /// let config = RegistryConfig::new("harbor.example.com");
    /// assert_eq!(config.base_url, "https://harbor.example.com");
    ///
    /// let config = RegistryConfig::new("http://127.0.0.1:8080/");
    /// assert_eq!(config.base_url, "http://127.0.0.1:8080");
    /// ```
    #[must_use]
    pub fn new(registry: impl Into<String>) -> Self {
        let registry = registry.into();
        let trimmed = registry.trim().trim_end_matches('/');
        let base_url = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        };

        Self {
            registry,
            base_url,
            credentials: None,
            timeout: None,
            user_agent: format!("harbor-ls/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the basic authentication credentials.
    ///
    /// # Examples
    ///
    /// ```
    /// use harbor_ls_registry::RegistryConfig;
    ///
    /// let config = RegistryConfig::new("harbor.example.com")
    ///     .with_credentials("admin", "Harbor12345");
    /// assert_eq!(config.credentials.unwrap().username, "admin");
    /// ```
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Checks that the configuration can be used to build a client.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidConfig`] if the registry is empty or no
    /// credentials were supplied.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.registry.trim().trim_end_matches('/').is_empty() {
            return Err(RegistryError::InvalidConfig {
                message: "registry must be defined".to_string(),
            });
        }
        if self.credentials.is_none() {
            return Err(RegistryError::InvalidConfig {
                message: "username and password are required".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the API root, e.g. `https://harbor.example.com/api/v2.0`.
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("{}/api/v2.0", self.base_url)
    }
}

/// Username and password for basic authentication.
#[derive(Clone)]
pub struct Credentials {
    /// Username.
    pub username: String,
    /// Password or robot account secret.
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_bare_host() {
        let config = RegistryConfig::new("harbor.example.com");
        assert_eq!(config.registry, "harbor.example.com");
        assert_eq!(config.base_url, "https://harbor.example.com");
        assert!(config.credentials.is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_new_with_scheme() {
        let config = RegistryConfig::new("http://localhost:5000/");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.api_root(), "http://localhost:5000/api/v2.0");
    }

    #[test]
    fn test_config_with_timeout() {
        let config = RegistryConfig::new("h").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_config_default_and_custom_user_agent() {
        let config = RegistryConfig::new("h");
        assert!(config.user_agent.starts_with("harbor-ls/"));

        let config = config.with_user_agent("ci-inventory/2.1");
        assert_eq!(config.user_agent, "ci-inventory/2.1");
    }

    #[test]
    fn test_validate_requires_registry() {
        let config = RegistryConfig::new("  ").with_credentials("u", "p");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_credentials() {
        let config = RegistryConfig::new("harbor.example.com");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("username and password"));
    }

    #[test]
    fn test_validate_accepts_empty_password() {
        let config = RegistryConfig::new("harbor.example.com").with_credentials("anonymous", "");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("admin", "Harbor12345");
        let debug = format!("{creds:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("Harbor12345"));
    }
}
