//! Change reports produced by the denomination ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One denomination paid out: `count` coins of `value` pence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    pub count: u32,
    pub value: u32,
}

impl ReportLine {
    /// Total value of the coins on this line.
    pub fn amount(&self) -> u32 {
        self.count * self.value
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}P", self.count, self.value)
    }
}

/// Coins handed back to the customer, largest denomination first.
///
/// Renders as one `"<count> x <value>P"` line per denomination, joined by
/// newlines. An empty report renders as the empty string.
///
/// # Example
///
/// ```rust
/// use vending_machine::money::{ChangeReport, ReportLine};
///
/// let report = ChangeReport::new(vec![
///     ReportLine { count: 1, value: 20 },
///     ReportLine { count: 1, value: 10 },
///     ReportLine { count: 1, value: 5 },
/// ]);
///
/// assert_eq!(report.total(), 35);
/// assert_eq!(report.to_string(), "1 x 20P\n1 x 10P\n1 x 5P");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReport {
    lines: Vec<ReportLine>,
}

impl ChangeReport {
    pub fn new(lines: Vec<ReportLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `count * value` over every line.
    pub fn total(&self) -> u32 {
        self.lines.iter().map(ReportLine::amount).sum()
    }

    /// Number of physical coins in the report.
    pub fn coin_count(&self) -> u32 {
        self.lines.iter().map(|line| line.count).sum()
    }
}

impl fmt::Display for ChangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
