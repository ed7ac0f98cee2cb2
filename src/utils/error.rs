use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API call {method} {url} returned {status}: {body}")]
    ApiStatusError {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[cfg(feature = "ui")]
    #[error("Browser automation error: {0}")]
    BrowserError(#[from] playwright_rs::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Timed out after {timeout_ms}ms waiting for '{description}'")]
    ElementTimeout { description: String, timeout_ms: u64 },

    #[error("Skipped: {reason}")]
    Skipped { reason: String },
}

pub type Result<T> = std::result::Result<T, E2eError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Network,
    Browser,
    Data,
    Assertion,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl E2eError {
    pub fn skipped(reason: impl Into<String>) -> Self {
        E2eError::Skipped {
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            E2eError::ApiError(_) | E2eError::ApiStatusError { .. } => ErrorCategory::Network,
            #[cfg(feature = "ui")]
            E2eError::BrowserError(_) => ErrorCategory::Browser,
            E2eError::ElementTimeout { .. } => ErrorCategory::Browser,
            E2eError::IoError(_) | E2eError::SerializationError(_) => ErrorCategory::Data,
            E2eError::ConfigError { .. }
            | E2eError::ConfigValidationError { .. }
            | E2eError::InvalidConfigValueError { .. }
            | E2eError::MissingConfigError { .. } => ErrorCategory::Config,
            E2eError::ValidationError { .. } => ErrorCategory::Assertion,
            E2eError::Skipped { .. } => ErrorCategory::Skip,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Skip => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Browser | ErrorCategory::Assertion | ErrorCategory::Data => {
                ErrorSeverity::High
            }
            ErrorCategory::Config => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Config => {
                "Check TEST_ENV, BASE_URL, API_URL and the credential variables, or the config/<env>.toml file"
            }
            ErrorCategory::Network => {
                "Make sure the blog API is running and reachable from this machine"
            }
            ErrorCategory::Browser => {
                "Install the Playwright browsers and re-run with HEADLESS=false to watch the failing step"
            }
            ErrorCategory::Data => "Check file permissions on the logs/, screenshots/ and reports/ directories",
            ErrorCategory::Assertion => "Inspect the failure screenshot and the test log",
            ErrorCategory::Skip => "Nothing to do",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            E2eError::ApiStatusError { method, url, status, .. } => {
                format!("The server rejected {} {} with HTTP {}", method, url, status)
            }
            E2eError::ElementTimeout { description, .. } => {
                format!("'{}' never appeared on the page", description)
            }
            E2eError::MissingConfigError { field } => {
                format!("Required setting '{}' is not configured", field)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}
