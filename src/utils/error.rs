use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid shift '{input}': expected an integer")]
    InvalidShift { input: String },

    #[error("Invalid menu choice '{input}': expected E, D, or X")]
    InvalidChoice { input: String },

    #[error("Failed to render {format} report: {message}")]
    RenderError { format: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 使用者輸入錯誤，重新提示即可
    Low,
    /// 輸出格式失敗，可以改用純文字
    Medium,
    /// 設定或處理錯誤
    High,
    /// 系統層級錯誤 (IO 等)
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CipherError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CipherError::InvalidShift { .. } | CipherError::InvalidChoice { .. } => {
                ErrorSeverity::Low
            }
            CipherError::RenderError { .. }
            | CipherError::SerializationError(_)
            | CipherError::CsvError(_) => ErrorSeverity::Medium,
            CipherError::ConfigValidationError { .. }
            | CipherError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            CipherError::IoError(_) | CipherError::ZipError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CipherError::IoError(e) => format!("Could not read or write a file: {}", e),
            CipherError::SerializationError(_) | CipherError::CsvError(_) => {
                "Failed to serialize the report".to_string()
            }
            CipherError::ZipError(_) => "Failed to build the report archive".to_string(),
            CipherError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            CipherError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            CipherError::InvalidShift { .. } => {
                "Invalid number. Please enter an integer (e.g., 3 or -1).".to_string()
            }
            CipherError::InvalidChoice { .. } => {
                "Invalid choice. Please enter E, D, or X.".to_string()
            }
            CipherError::RenderError { format, .. } => {
                format!("The {} report could not be generated", format)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CipherError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            CipherError::SerializationError(_)
            | CipherError::CsvError(_)
            | CipherError::RenderError { .. } => "Use the 'text' format instead",
            CipherError::ZipError(_) => "Disable [output.compression] and try again",
            CipherError::ConfigValidationError { .. }
            | CipherError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run again"
            }
            CipherError::InvalidShift { .. } => "Enter a whole number such as 3 or -2",
            CipherError::InvalidChoice { .. } => "Enter E, D, or X",
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
