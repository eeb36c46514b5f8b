use crate::fit::FitError;
use crate::plot::PlotError;

/// Exit code for unreadable or malformed input files.
pub const EXIT_INPUT: u8 = 2;
/// Exit code for input that parsed but held no usable rows.
pub const EXIT_NO_DATA: u8 = 3;
/// Exit code for a numeric fitting failure that slipped past the guards.
pub const EXIT_FIT: u8 = 4;
/// Exit code for drawing failures and unwritable output files.
pub const EXIT_PLOT: u8 = 5;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    /// Prefix the message with the route/stop (or file) being processed.
    pub fn context(self, context: impl std::fmt::Display) -> Self {
        Self {
            exit_code: self.exit_code,
            message: format!("{context}: {}", self.message),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(EXIT_FIT, err.to_string())
    }
}

impl From<PlotError> for AppError {
    fn from(err: PlotError) -> Self {
        match err {
            PlotError::Fit(fit) => fit.into(),
            other => AppError::new(EXIT_PLOT, other.to_string()),
        }
    }
}
