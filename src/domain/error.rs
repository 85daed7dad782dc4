use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Re-attribute a provider error, keeping its message
    pub fn for_provider(self, provider: impl Into<String>) -> Self {
        match self {
            Self::Provider { message, .. } => Self::Provider {
                provider: provider.into(),
                message,
            },
            other => other,
        }
    }

    /// Name of the provider that produced this error, if any
    pub fn provider_name(&self) -> Option<&str> {
        match self {
            Self::Provider { provider, .. } => Some(provider),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Query cannot be empty");
        assert_eq!(error.to_string(), "Validation error: Query cannot be empty");
    }

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("tavily", "HTTP 502");
        assert_eq!(error.to_string(), "Provider error: tavily - HTTP 502");
        assert_eq!(error.provider_name(), Some("tavily"));
    }

    #[test]
    fn test_for_provider_renames_only_provider_errors() {
        let error = DomainError::provider("http", "HTTP 500").for_provider("coingecko");
        assert_eq!(error.to_string(), "Provider error: coingecko - HTTP 500");

        let error = DomainError::validation("bad").for_provider("coingecko");
        assert_eq!(error.provider_name(), None);
    }

    #[test]
    fn test_configuration_error_has_no_provider() {
        let error = DomainError::configuration("duplicate topic key");
        assert_eq!(error.provider_name(), None);
    }
}
