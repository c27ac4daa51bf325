//! Spendable coin inventory and the greedy change algorithm.

use super::change::{ChangeReport, ReportLine};
use super::error::ChangeError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What happens to coins taken during a change attempt that fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortfallPolicy {
    /// Put the coins back; a failed attempt leaves the ledger untouched.
    #[default]
    Restore,
    /// Leave them out of the ledger; the coins are lost.
    Forfeit,
}

/// A coin value and how many of them the machine can pay out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    pub value: u32,
    pub count: u32,
}

impl Denomination {
    pub fn new(value: u32, count: u32) -> Self {
        Self { value, count }
    }
}

/// Coins available for change, kept in descending order of value.
///
/// Counts only decrease. The ledger is consumed by refunds and change and is
/// never topped up from customer deposits.
#[derive(Clone, Debug)]
pub struct DenominationLedger {
    denominations: Vec<Denomination>,
    policy: ShortfallPolicy,
}

impl DenominationLedger {
    pub fn new<I>(denominations: I, policy: ShortfallPolicy) -> Self
    where
        I: IntoIterator<Item = Denomination>,
    {
        // A zero-value coin can never reduce an amount.
        let mut denominations: Vec<Denomination> = denominations
            .into_iter()
            .filter(|d| d.value > 0)
            .collect();
        denominations.sort_by(|a, b| b.value.cmp(&a.value));
        Self {
            denominations,
            policy,
        }
    }

    /// Pay `amount` out of the ledger, largest coins first.
    ///
    /// For each denomination the algorithm takes as many coins as fit into the
    /// remaining amount, capped by what is on hand. Greedy is not globally
    /// optimal: holding one 50P and three 20P, a request for 60P takes the 50P
    /// first and then fails, although three 20P would have covered it.
    ///
    /// On failure the ledger is restored or not according to the
    /// [`ShortfallPolicy`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use vending_machine::money::{Denomination, DenominationLedger, ShortfallPolicy};
    ///
    /// let mut ledger = DenominationLedger::new(
    ///     [Denomination::new(5, 10), Denomination::new(20, 5), Denomination::new(10, 5)],
    ///     ShortfallPolicy::Restore,
    /// );
    ///
    /// let change = ledger.calculate_change(35).unwrap();
    /// assert_eq!(change.to_string(), "1 x 20P\n1 x 10P\n1 x 5P");
    /// assert_eq!(ledger.count_of(20), Some(4));
    /// ```
    pub fn calculate_change(&mut self, amount: u32) -> Result<ChangeReport, ChangeError> {
        let snapshot = match self.policy {
            ShortfallPolicy::Restore => Some(self.denominations.clone()),
            ShortfallPolicy::Forfeit => None,
        };

        let mut remaining = amount;
        let mut lines = Vec::new();

        for denomination in self.denominations.iter_mut() {
            if remaining == 0 {
                break;
            }

            let desired = remaining / denomination.value;
            if desired == 0 {
                continue;
            }

            let used = desired.min(denomination.count);
            if used == 0 {
                continue;
            }

            remaining -= used * denomination.value;
            denomination.count -= used;
            lines.push(ReportLine {
                count: used,
                value: denomination.value,
            });
        }

        if remaining > 0 {
            if let Some(snapshot) = snapshot {
                self.denominations = snapshot;
            }
            debug!(
                amount,
                shortfall = remaining,
                policy = ?self.policy,
                "change could not be made"
            );
            return Err(ChangeError::Insufficient {
                requested: amount,
                shortfall: remaining,
            });
        }

        debug!(amount, coins = lines.len(), "change made");
        Ok(ChangeReport::new(lines))
    }

    /// Coins on hand for `value`, or `None` if the machine does not use it.
    pub fn count_of(&self, value: u32) -> Option<u32> {
        self.denominations
            .iter()
            .find(|d| d.value == value)
            .map(|d| d.count)
    }

    pub fn contains(&self, value: u32) -> bool {
        self.count_of(value).is_some()
    }

    /// Value of every coin left in the ledger.
    pub fn total_value(&self) -> u64 {
        self.denominations
            .iter()
            .map(|d| u64::from(d.value) * u64::from(d.count))
            .sum()
    }

    pub fn denominations(&self) -> &[Denomination] {
        &self.denominations
    }

    pub fn policy(&self) -> ShortfallPolicy {
        self.policy
    }

    /// Every denomination with its count, largest first, one
    /// `"<count> x <value>P"` line each.
    pub fn report(&self) -> String {
        self.denominations
            .iter()
            .map(|d| {
                ReportLine {
                    count: d.count,
                    value: d.value,
                }
                .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
