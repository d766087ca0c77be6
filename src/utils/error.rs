use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Invalid mode: {input:?}")]
    InvalidMode { input: String },

    #[error("Invalid source: {input:?}")]
    InvalidSource { input: String },

    #[error("Invalid confirmation: {input:?}")]
    InvalidConfirmation { input: String },

    #[error("Shift is not a number: {input:?}")]
    ShiftNotANumber { input: String },

    #[error("Shift {value} out of range {min}..={max}")]
    ShiftOutOfRange { value: i64, min: u8, max: u8 },

    #[error("File {path} not found")]
    FileNotFound { path: String },

    #[error("Error reading file {path}: {source}")]
    FileUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Console input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CipherError {
    /// Errors caused by a bad answer at a prompt. The shell reprompts on these.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CipherError::InvalidMode { .. }
                | CipherError::InvalidSource { .. }
                | CipherError::InvalidConfirmation { .. }
                | CipherError::ShiftNotANumber { .. }
                | CipherError::ShiftOutOfRange { .. }
                | CipherError::FileNotFound { .. }
                | CipherError::FileUnreadable { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CipherError::InvalidMode { .. } => {
                "Invalid mode, please enter 'e' or 'd'.".to_string()
            }
            CipherError::InvalidSource { .. } => {
                "Invalid choice, please enter 'f' or 'c'.".to_string()
            }
            CipherError::InvalidConfirmation { .. } => {
                "Invalid response, please enter 'y' or 'n'.".to_string()
            }
            CipherError::ShiftNotANumber { .. } => "Please enter a valid number.".to_string(),
            CipherError::ShiftOutOfRange { min, max, .. } => {
                format!("Please enter a number between {} and {}.", min, max)
            }
            CipherError::FileNotFound { path } => format!("File {} not found.", path),
            CipherError::FileUnreadable { source, .. } => {
                format!("Error reading file: {}", source)
            }
            CipherError::InputClosed => "No more input, exiting.".to_string(),
            CipherError::IoError(e) => format!("I/O failure: {}", e),
            CipherError::ConfigError { message } => format!("Bad configuration: {}", message),
            CipherError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad configuration value for '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CipherError::InvalidMode { .. }
            | CipherError::InvalidSource { .. }
            | CipherError::InvalidConfirmation { .. } => "Answer with one of the listed letters",
            CipherError::ShiftNotANumber { .. } | CipherError::ShiftOutOfRange { .. } => {
                "Enter a whole number from 1 to 25"
            }
            CipherError::FileNotFound { .. } => "Check the filename and the working directory",
            CipherError::FileUnreadable { .. } => "Check the file permissions and encoding",
            CipherError::InputClosed => "Run the program from an interactive terminal",
            CipherError::IoError(_) => "Check the terminal and the output location",
            CipherError::ConfigError { .. } | CipherError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or run without --config"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
