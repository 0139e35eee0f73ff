//! P&L extraction and the running aggregate for one pass over a trade log.

use std::sync::OnceLock;

static PNL_REGEX: OnceLock<regex::Regex> = OnceLock::new();

fn pnl_regex() -> &'static regex::Regex {
    PNL_REGEX.get_or_init(|| {
        // This regex pattern is compile-time constant and always valid
        regex::Regex::new(r"P&L: \$([-0-9.]+)").expect("P&L regex is valid")
    })
}

/// Extract the P&L value from one log line.
///
/// Looks for `P&L: $<number>` where the number is an optional minus sign,
/// digits, and an optional decimal fraction. Returns `None` when the marker
/// is absent or the captured text is not a valid number (e.g. `$.` or `$--`).
/// A non-match is not an error; the line is skipped.
pub fn extract_pnl(line: &str) -> Option<f64> {
    let caps = pnl_regex().captures(line)?;
    caps.get(1)?.as_str().parse::<f64>().ok()
}

/// Running totals accumulated over one pass of the trade log.
///
/// Invariants: `wins + losses == pnls.len()` and `total_pnl == sum(pnls)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    pub total_pnl: f64,
    pub wins: usize,
    pub losses: usize,
    pub pnls: Vec<f64>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one parsed P&L value into the running totals.
    ///
    /// A P&L of exactly zero counts as a loss: break-even trades are not wins.
    pub fn accumulate(&mut self, pnl: f64) {
        self.total_pnl += pnl;
        if pnl > 0.0 {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.pnls.push(pnl);
    }

    /// Run the whole pass: extract from each line in order, accumulate matches.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut aggregate = Self::new();
        for line in lines {
            if let Some(pnl) = extract_pnl(line.as_ref()) {
                aggregate.accumulate(pnl);
            }
        }
        aggregate
    }
}
