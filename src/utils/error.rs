use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Places API returned {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Api,
    Storage,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlacesError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PlacesError::NetworkError(_) => ErrorCategory::Network,
            // 200 但 body 不是預期的 JSON，也算 API 回應的問題
            PlacesError::ApiError { .. } | PlacesError::SerializationError(_) => {
                ErrorCategory::Api
            }
            PlacesError::IoError(_) => ErrorCategory::Storage,
            PlacesError::ConfigError { .. }
            | PlacesError::MissingConfigError { .. }
            | PlacesError::InvalidConfigValueError { .. }
            | PlacesError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            PlacesError::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Api => match self {
                // 401/403 代表金鑰本身有問題，重跑也沒用
                PlacesError::ApiError { status, .. } if *status == 401 || *status == 403 => {
                    ErrorSeverity::High
                }
                _ => ErrorSeverity::Medium,
            },
            ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息，不含內部細節
    pub fn user_friendly_message(&self) -> String {
        match self {
            PlacesError::NetworkError(e) if e.is_timeout() => {
                "The Places API did not answer in time".to_string()
            }
            PlacesError::NetworkError(_) => "Could not reach the Places API".to_string(),
            PlacesError::ApiError { status, message } => {
                format!("Places API error ({}): {}", status, message)
            }
            PlacesError::IoError(e) => format!("Could not write the results file: {}", e),
            PlacesError::SerializationError(e) => format!("Unexpected API response: {}", e),
            PlacesError::ConfigError { message } => format!("Configuration problem: {}", message),
            PlacesError::MissingConfigError { field } => {
                format!("Missing setting '{}' in the settings file", field)
            }
            PlacesError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            PlacesError::ConfigValidationError { field, message } => {
                format!("Settings file could not be read ({}): {}", field, message)
            }
            PlacesError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlacesError::NetworkError(_) => {
                "Check your internet connection and run the search again"
            }
            PlacesError::ApiError { status, .. } => match status {
                400 => "Check the keyword and the optional filters in settings.toml",
                401 | 403 => "Verify the API key and that the Places API (New) is enabled for it",
                429 => "The API quota is exhausted; wait before searching again",
                _ => "Run the search again later",
            },
            PlacesError::IoError(_) => "Make sure the results folder is writable",
            PlacesError::SerializationError(_) => {
                "Run the search again; report it if it persists"
            }
            PlacesError::MissingConfigError { .. }
            | PlacesError::InvalidConfigValueError { .. }
            | PlacesError::ConfigValidationError { .. }
            | PlacesError::ConfigError { .. } => {
                "Copy settings.example.toml to settings.toml and insert your API key"
            }
            PlacesError::ValidationError { .. } => "Enter a non-empty keyword",
        }
    }
}

pub type Result<T> = std::result::Result<T, PlacesError>;
