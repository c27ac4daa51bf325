//! Builder for constructing vending machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::display::MessageSink;
use crate::machine::VendingMachine;
use crate::money::ShortfallPolicy;

/// Builder for constructing vending machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use vending_machine::builder::VendingMachineBuilder;
/// use vending_machine::display::RecordingSink;
/// use vending_machine::machine::MachineState;
///
/// let machine = VendingMachineBuilder::new()
///     .stock(3)
///     .display(RecordingSink::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), MachineState::AwaitingSelection);
/// assert_eq!(machine.total_item_count(), 15);
/// ```
pub struct VendingMachineBuilder<D: MessageSink> {
    config: Option<MachineConfig>,
    stock: Option<u32>,
    policy: Option<ShortfallPolicy>,
    display: Option<D>,
}

impl<D: MessageSink> VendingMachineBuilder<D> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            stock: None,
            policy: None,
            display: None,
        }
    }

    /// Seed data to use instead of the reference machine.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Start every product with `units` in stock.
    pub fn stock(mut self, units: u32) -> Self {
        self.stock = Some(units);
        self
    }

    /// Override the configuration's shortfall policy.
    pub fn shortfall_policy(mut self, policy: ShortfallPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Where customer messages go (required).
    pub fn display(mut self, display: D) -> Self {
        self.display = Some(display);
        self
    }

    /// Build the machine.
    /// Returns an error if the sink is missing or the configuration is invalid.
    pub fn build(self) -> Result<VendingMachine<D>, BuildError> {
        let display = self.display.ok_or(BuildError::MissingDisplay)?;

        let mut config = self.config.unwrap_or_default();
        if let Some(units) = self.stock {
            config = config.with_uniform_stock(units);
        }
        if let Some(policy) = self.policy {
            config = config.with_shortfall_policy(policy);
        }
        config.check()?;

        Ok(VendingMachine::from_config(config, display))
    }
}

impl<D: MessageSink> Default for VendingMachineBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}
