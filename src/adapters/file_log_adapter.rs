//! File-backed trade log adapter.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::domain::error::TradestatsError;
use crate::ports::log_port::TradeLogPort;

pub struct FileLogAdapter {
    path: PathBuf,
}

impl FileLogAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_error(&self, reason: impl ToString) -> TradestatsError {
        TradestatsError::LogRead {
            file: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl TradeLogPort for FileLogAdapter {
    // The file handle is scoped to this call: dropped on return, success or error.
    fn read_lines(&self) -> Result<Vec<String>, TradestatsError> {
        let file = File::open(&self.path).map_err(|e| self.read_error(e))?;
        let reader = BufReader::new(file);

        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line.map_err(|e| self.read_error(e))?);
        }
        Ok(lines)
    }
}
