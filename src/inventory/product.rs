use serde::{Deserialize, Serialize};

/// An item the machine sells. Names are unique within a machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Price in pence.
    pub price: u32,
    pub quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: u32, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}
