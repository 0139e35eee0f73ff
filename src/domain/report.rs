//! Summary report derived from a finished aggregate.

use std::fmt;

use super::aggregator::Aggregate;

/// Immutable summary statistics for one pass over a trade log.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    /// Win rate as a percentage (0.0 to 100.0).
    pub win_rate: f64,
    pub total_pnl: f64,
}

impl Report {
    /// Finalize an aggregate into a report.
    pub fn compute(aggregate: &Aggregate) -> Self {
        let total_trades = aggregate.wins + aggregate.losses;

        // Guard against division by zero on an empty log.
        let win_rate = if total_trades > 0 {
            aggregate.wins as f64 / total_trades as f64 * 100.0
        } else {
            0.0
        };

        Report {
            total_trades,
            wins: aggregate.wins,
            losses: aggregate.losses,
            win_rate,
            total_pnl: aggregate.total_pnl,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Trades: {}", self.total_trades)?;
        writeln!(f, "Wins: {}", self.wins)?;
        writeln!(f, "Losses: {}", self.losses)?;
        writeln!(f, "Win Rate: {:.2}%", self.win_rate)?;
        write!(f, "Total PnL: ${:.2}", self.total_pnl)
    }
}
