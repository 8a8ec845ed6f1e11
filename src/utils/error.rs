use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Source '{path}' is unavailable: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record in {source_name} at line {line}: expected {expected} columns, found {found}")]
    MalformedRecord {
        source_name: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Invalid number in {source_name} at line {line}, field '{field}': '{value}'")]
    InvalidNumber {
        source_name: String,
        line: u64,
        field: String,
        value: String,
    },

    #[error("Job '{job_id}' cannot be scored: {field} must be {}", degenerate_requirement(.field))]
    DegenerateJob { job_id: String, field: String },

    #[error("Configuration validation error in field '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Data,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatchError::ConfigValidationError { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MatchError::SourceUnavailable { .. } => ErrorCategory::Input,
            MatchError::CsvError(_)
            | MatchError::MalformedRecord { .. }
            | MatchError::InvalidNumber { .. }
            | MatchError::DegenerateJob { .. } => ErrorCategory::Data,
            MatchError::IoError(_) | MatchError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Input | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            MatchError::SourceUnavailable { path, .. } => {
                format!("Check that '{}' exists and is readable", path)
            }
            MatchError::CsvError(_) => {
                "Make sure the input files are valid comma-separated CSV".to_string()
            }
            MatchError::MalformedRecord { expected, .. } => format!(
                "Every data row needs at least {} columns; fix or remove the short row",
                expected
            ),
            MatchError::InvalidNumber { .. } => {
                "Fix the numeric value, or drop --strict-numbers to treat it as 0".to_string()
            }
            MatchError::DegenerateJob { .. } => {
                "Jobs need at least one skill, a positive required experience and a positive budget"
                    .to_string()
            }
            MatchError::ConfigValidationError { field, .. }
            | MatchError::InvalidConfigValueError { field, .. } => {
                format!("Review the '{}' setting", field)
            }
            MatchError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            MatchError::IoError(_) => "Check permissions of the output directory".to_string(),
            MatchError::SerializationError(_) => {
                "Retry with a different output format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Could not read input: {}", self),
            ErrorCategory::Data => format!("Input data is invalid: {}", self),
            ErrorCategory::Output => format!("Could not write results: {}", self),
        }
    }

    /// 依嚴重程度決定的程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

fn degenerate_requirement(field: &str) -> &'static str {
    if field == "skills" {
        "non-empty"
    } else {
        "non-zero"
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
