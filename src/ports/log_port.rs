//! Trade log access port trait.

use crate::domain::error::TradestatsError;

/// Port for reading the raw trade log.
///
/// Returns the lines of the finite input in order. Reading is all-or-nothing:
/// a failure mid-read yields an error, never a partial log.
pub trait TradeLogPort {
    fn read_lines(&self) -> Result<Vec<String>, TradestatsError>;
}
