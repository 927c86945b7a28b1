//! Cart commands: the two user intents the ledger understands.

use serde::{Deserialize, Serialize};

use shopcart_catalog::Product;
use shopcart_core::ProductId;

use crate::ledger::CartLedger;

/// Intent to change the cart.
///
/// Commands are plain values so a session can be recorded and replayed onto an
/// empty ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum CartCommand {
    Add(Product),
    Remove(ProductId),
}

impl CartCommand {
    pub fn command_type(&self) -> &'static str {
        match self {
            CartCommand::Add(_) => "cart.add",
            CartCommand::Remove(_) => "cart.remove",
        }
    }

    pub fn product_id(&self) -> ProductId {
        match self {
            CartCommand::Add(product) => product.id,
            CartCommand::Remove(id) => *id,
        }
    }
}

impl CartLedger {
    /// Next ledger after `command`.
    pub fn apply(&self, command: &CartCommand) -> CartLedger {
        match command {
            CartCommand::Add(product) => self.add(product),
            CartCommand::Remove(id) => self.remove(*id),
        }
    }

    /// Fold `commands` onto an empty ledger.
    pub fn replay<'a, I>(commands: I) -> CartLedger
    where
        I: IntoIterator<Item = &'a CartCommand>,
    {
        commands
            .into_iter()
            .fold(CartLedger::new(), |ledger, command| ledger.apply(command))
    }
}
