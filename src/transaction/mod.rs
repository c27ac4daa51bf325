//! The running purchase: what was selected, what was paid, what is owed.
//!
//! [`TransactionLedger`] owns the product [`Inventory`] and the spendable
//! [`DenominationLedger`]. States never touch either directly; every
//! mutation goes through the operations here.

use crate::inventory::{Inventory, Product, ProductId};
use crate::money::{ChangeError, ChangeReport, DenominationLedger};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Bookkeeping for the single active purchase.
///
/// `balance` is `price - coins_inserted`: positive while the customer still
/// owes money, negative when the machine owes change. It is recomputed when a
/// product is bound and when a coin is added against a bound selection.
#[derive(Debug)]
pub struct TransactionLedger {
    inventory: Inventory,
    denominations: DenominationLedger,
    deposited: BTreeMap<u32, u32>,
    selected: Option<ProductId>,
    coins_inserted: u32,
    balance: i64,
    id: Option<Uuid>,
}

impl TransactionLedger {
    pub fn new(inventory: Inventory, denominations: DenominationLedger) -> Self {
        Self {
            inventory,
            denominations,
            deposited: BTreeMap::new(),
            selected: None,
            coins_inserted: 0,
            balance: 0,
            id: None,
        }
    }

    /// Bind `name` as the product being bought.
    ///
    /// An unknown name clears the selection. Coins already inserted are kept
    /// and count toward the new price.
    pub fn select_product(&mut self, name: &str) -> Option<&Product> {
        self.selected = self.inventory.select_for_transaction(name);
        self.id = self.selected.map(|_| Uuid::new_v4());
        if let Some(price) = self.selected_product().map(|p| p.price) {
            self.balance = i64::from(price) - i64::from(self.coins_inserted);
        }

        match self.id {
            Some(id) => debug!(txn = %id, product = name, "product selected"),
            None => debug!(product = name, "selection cleared for unknown product"),
        }

        self.selected_product()
    }

    /// Record a coin from the customer.
    ///
    /// Known denominations are tallied in the deposit box; the coin is never
    /// made available for change.
    pub fn add_coin(&mut self, value: u32) {
        if self.denominations.contains(value) {
            *self.deposited.entry(value).or_insert(0) += 1;
        } else {
            warn!(value, "coin of unknown denomination accepted");
        }

        self.coins_inserted = self.coins_inserted.saturating_add(value);

        if let Some(price) = self.selected_product().map(|p| p.price) {
            self.balance = i64::from(price) - i64::from(self.coins_inserted);
        }

        debug!(
            value,
            inserted = self.coins_inserted,
            balance = self.balance,
            "coin added"
        );
    }

    /// Return everything inserted so far and end the transaction.
    ///
    /// The inserted total and the selection are cleared whether or not the
    /// refund could be paid out.
    pub fn refund_all(&mut self) -> Result<ChangeReport, ChangeError> {
        let amount = self.coins_inserted;
        let result = self.denominations.calculate_change(amount);

        match &result {
            Ok(report) => info!(txn = ?self.id, amount, coins = report.coin_count(), "refunded"),
            Err(err) => warn!(txn = ?self.id, amount, error = %err, "refund failed"),
        }

        self.coins_inserted = 0;
        self.selected = None;
        self.id = None;
        result
    }

    /// Pay out the magnitude of the current balance.
    ///
    /// Leaves the inserted total alone; the caller decides whether the
    /// purchase completes or is refunded.
    pub fn tender_change(&mut self) -> Result<ChangeReport, ChangeError> {
        let amount = u32::try_from(self.balance.unsigned_abs()).unwrap_or(u32::MAX);
        self.denominations.calculate_change(amount)
    }

    /// Release the selected product: one unit leaves stock and the inserted
    /// total is cleared.
    pub fn complete_purchase(&mut self) {
        self.coins_inserted = 0;

        match self.selected.take() {
            Some(id) => {
                self.inventory.decrement(id);
                if let Some(product) = self.inventory.get(id) {
                    info!(
                        txn = ?self.id,
                        product = %product.name,
                        remaining = product.quantity,
                        "purchase completed"
                    );
                }
            }
            None => warn!("purchase completed with nothing selected"),
        }

        self.id = None;
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn coins_inserted(&self) -> u32 {
        self.coins_inserted
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected.and_then(|id| self.inventory.get(id))
    }

    pub fn total_item_count(&self) -> u32 {
        self.inventory.total_quantity()
    }

    /// How many coins of `value` customers have inserted so far.
    pub fn deposited(&self, value: u32) -> u32 {
        self.deposited.get(&value).copied().unwrap_or(0)
    }

    /// Id of the purchase in progress, if a product is bound.
    pub fn transaction_id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn denominations(&self) -> &DenominationLedger {
        &self.denominations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Denomination, ShortfallPolicy};

    fn ledger() -> TransactionLedger {
        TransactionLedger::new(
            Inventory::new(vec![
                Product::new("Coke", 65, 1),
                Product::new("Tango", 163, 3),
            ]),
            DenominationLedger::new(
                [
                    Denomination::new(1, 100),
                    Denomination::new(2, 100),
                    Denomination::new(5, 50),
                    Denomination::new(10, 5),
                    Denomination::new(20, 5),
                    Denomination::new(50, 2),
                ],
                ShortfallPolicy::Restore,
            ),
        )
    }

    #[test]
    fn add_coin_recomputes_balance_against_selection() {
        let mut ledger = ledger();
        ledger.select_product("Coke");

        ledger.add_coin(50);
        assert_eq!(ledger.balance(), 15);

        ledger.add_coin(50);
        assert_eq!(ledger.balance(), -35);
        assert_eq!(ledger.coins_inserted(), 100);
    }

    #[test]
    fn add_coin_without_selection_leaves_balance() {
        let mut ledger = ledger();

        ledger.add_coin(20);

        assert_eq!(ledger.balance(), 0);
        assert_eq!(ledger.coins_inserted(), 20);
    }

    #[test]
    fn deposits_are_tallied_but_not_spendable() {
        let mut ledger = ledger();
        ledger.add_coin(50);
        ledger.add_coin(50);
        ledger.add_coin(3);

        assert_eq!(ledger.deposited(50), 2);
        assert_eq!(ledger.deposited(3), 0);
        assert_eq!(ledger.denominations().count_of(50), Some(2));
    }

    #[test]
    fn select_product_keeps_inserted_coins() {
        let mut ledger = ledger();
        ledger.select_product("Coke");
        ledger.add_coin(20);

        let selected = ledger.select_product("Tango").map(|p| p.price);

        assert_eq!(selected, Some(163));
        assert_eq!(ledger.coins_inserted(), 20);
        assert_eq!(ledger.balance(), 143);
    }

    #[test]
    fn selecting_after_a_purchase_prices_the_new_product() {
        let mut ledger = ledger();
        ledger.select_product("Coke");
        ledger.add_coin(50);
        ledger.add_coin(50);
        ledger.complete_purchase();
        assert_eq!(ledger.balance(), -35);

        ledger.select_product("Tango");

        assert_eq!(ledger.balance(), 163);
    }

    #[test]
    fn selecting_unknown_product_clears_selection() {
        let mut ledger = ledger();
        ledger.select_product("Coke");
        assert!(ledger.transaction_id().is_some());

        assert!(ledger.select_product("Pepsi").is_none());
        assert!(ledger.selected_product().is_none());
        assert!(ledger.transaction_id().is_none());
    }

    #[test]
    fn refund_all_returns_inserted_amount_and_resets() {
        let mut ledger = ledger();
        ledger.select_product("Tango");
        ledger.add_coin(50);
        ledger.add_coin(20);

        let refund = ledger.refund_all().unwrap();

        assert_eq!(refund.total(), 70);
        assert_eq!(ledger.coins_inserted(), 0);
        assert!(ledger.selected_product().is_none());
    }

    #[test]
    fn refund_twice_is_idempotent() {
        let mut ledger = ledger();
        ledger.add_coin(10);
        ledger.refund_all().unwrap();
        let value_after_first = ledger.denominations().total_value();

        let second = ledger.refund_all().unwrap();

        assert!(second.is_empty());
        assert_eq!(ledger.denominations().total_value(), value_after_first);
    }

    #[test]
    fn tender_change_pays_magnitude_of_balance() {
        let mut ledger = ledger();
        ledger.select_product("Coke");
        ledger.add_coin(50);
        ledger.add_coin(50);

        let change = ledger.tender_change().unwrap();

        assert_eq!(change.to_string(), "1 x 20P\n1 x 10P\n1 x 5P");
        assert_eq!(ledger.coins_inserted(), 100);
    }

    #[test]
    fn complete_purchase_decrements_stock() {
        let mut ledger = ledger();
        ledger.select_product("Coke");
        ledger.add_coin(50);
        ledger.add_coin(20);

        ledger.complete_purchase();

        assert_eq!(ledger.inventory().get_quantity("Coke"), 0);
        assert_eq!(ledger.total_item_count(), 3);
        assert_eq!(ledger.coins_inserted(), 0);
        assert!(ledger.selected_product().is_none());
        assert_eq!(ledger.balance(), -5);
    }
}
