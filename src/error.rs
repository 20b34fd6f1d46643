use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Service '{0}' not found in catalog")]
    ServiceNotFound(String),

    #[error("Missing required parameters for '{service}': {}", .missing.join(", "))]
    MissingParameters {
        service: String,
        missing: Vec<String>,
    },

    #[error("Invalid value for parameter '{key}': {value}")]
    InvalidParameterValue { key: String, value: String },

    #[error("Unknown scope '{0}' (expected 'server' or 'region')")]
    UnknownScope(String),

    #[error("Template for '{service}' has no value for placeholder '{{{placeholder}}}'")]
    TemplateSubstitution {
        service: String,
        placeholder: String,
    },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Failed to load configuration from {origin}: {reason}")]
    ConfigurationLoad { origin: String, reason: String },

    #[error("Request failed: {url} ({cause})")]
    ServiceCall { url: String, cause: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid tool arguments: {0}")]
    InvalidToolArguments(String),
}
