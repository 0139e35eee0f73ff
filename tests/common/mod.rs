#![allow(dead_code)]

use tradestats::domain::error::TradestatsError;
use tradestats::ports::log_port::TradeLogPort;

/// In-memory trade log for pipeline tests.
pub struct MockLogPort {
    pub lines: Vec<String>,
    pub error: Option<String>,
}

impl MockLogPort {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            error: None,
        }
    }

    pub fn with_lines(mut self, lines: &[&str]) -> Self {
        self.lines = lines.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl TradeLogPort for MockLogPort {
    fn read_lines(&self) -> Result<Vec<String>, TradestatsError> {
        if let Some(reason) = &self.error {
            return Err(TradestatsError::LogRead {
                file: "mock".to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.lines.clone())
    }
}
