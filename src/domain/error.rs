//! Domain error types.

/// Top-level error type for tradestats.
#[derive(Debug, thiserror::Error)]
pub enum TradestatsError {
    #[error("failed to read trade log {file}: {reason}")]
    LogRead { file: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TradestatsError> for std::process::ExitCode {
    fn from(err: &TradestatsError) -> Self {
        let code: u8 = match err {
            TradestatsError::Io(_) => 1,
            TradestatsError::LogRead { .. } => 2,
        };
        std::process::ExitCode::from(code)
    }
}
