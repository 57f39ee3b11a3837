//! Error types for registry operations.

use thiserror::Error;

/// Coarse classification of a [`RegistryError`].
///
/// The scanner treats both kinds the same way (skip the branch and continue),
/// but logs them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The registry rejected the credentials or denied access to the resource.
    Auth,
    /// Any other network, HTTP or decoding failure.
    Transport,
}

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry answered 401 or 403.
    #[error("Authentication failed for {url}: HTTP {status}")]
    AuthenticationFailed {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The registry answered with another non-success status.
    #[error("HTTP error from {url}: {status} - {message}")]
    HttpError {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Failed to reach the registry.
    #[error("Failed to connect to registry at {url}: {source}")]
    ConnectionFailed {
        /// Request URL.
        url: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be decoded.
    #[error("Invalid response from {url}: {source}")]
    InvalidResponse {
        /// Request URL.
        url: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// Invalid URL.
    #[error("Invalid URL: {url}")]
    InvalidUrl {
        /// URL string.
        url: String,
    },

    /// Invalid client configuration.
    #[error("Invalid registry configuration: {message}")]
    InvalidConfig {
        /// Error message.
        message: String,
    },
}

impl RegistryError {
    /// Classifies the error as an authorization or a transport failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::AuthenticationFailed { .. } => ErrorKind::Auth,
            Self::HttpError { .. }
            | Self::ConnectionFailed { .. }
            | Self::InvalidResponse { .. }
            | Self::InvalidUrl { .. }
            | Self::InvalidConfig { .. } => ErrorKind::Transport,
        }
    }

    /// Returns `true` if the registry denied access.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self.kind(), ErrorKind::Auth)
    }

    /// Maps a status code to the matching error variant.
    pub(crate) fn from_status(url: &str, status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationFailed {
                url: url.to_string(),
                status,
            },
            _ => Self::HttpError {
                url: url.to_string(),
                status,
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_unauthorized() {
        let err = RegistryError::from_status("https://h/api/v2.0/projects", 401, String::new());
        assert_eq!(err.kind(), ErrorKind::Auth);
        assert_eq!(
            err.to_string(),
            "Authentication failed for https://h/api/v2.0/projects: HTTP 401"
        );
    }

    #[test]
    fn test_from_status_forbidden() {
        let err = RegistryError::from_status("https://h/x", 403, "denied".to_string());
        assert!(err.is_auth());
    }

    #[test]
    fn test_from_status_not_found_is_transport() {
        let err = RegistryError::from_status("https://h/x", 404, "missing".to_string());
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = RegistryError::InvalidConfig {
            message: "registry host must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid registry configuration: registry host must not be empty"
        );
        assert!(!err.is_auth());
    }
}
