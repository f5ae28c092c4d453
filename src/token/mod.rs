use std::collections::HashMap;

use crate::error::TokenError;

/// Default token metadata for the registry's carbon credit.
pub const TOKEN_NAME: &str = "BlueCarbonToken";
pub const TOKEN_SYMBOL: &str = "BCT";

/// Balance map for the registry's fungible carbon-credit token.
/// Supply only grows via `issue`; `transfer` conserves it.
#[derive(Debug)]
pub struct TokenLedger {
    name: String,
    symbol: String,
    balances: HashMap<String, u64>,
    total_supply: u64,
}

impl TokenLedger {
    pub fn new() -> Self {
        Self {
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            balances: HashMap::new(),
            total_supply: 0,
        }
    }

    /// Credit `amount` to `user`, creating the entry if absent.
    /// Mints unconditionally; access control is the caller's concern.
    pub fn issue(&mut self, user: &str, amount: u64) {
        *self.balances.entry(user.to_string()).or_insert(0) += amount;
        self.total_supply += amount;
    }

    /// Move `amount` from `sender` to `receiver`. On insufficient funds
    /// neither balance is touched and the error is returned to the caller.
    pub fn transfer(
        &mut self,
        sender: &str,
        receiver: &str,
        amount: u64,
    ) -> Result<(), TokenError> {
        let balance = self.balance_of(sender);
        if balance < amount {
            return Err(TokenError::InsufficientFunds {
                user: sender.to_string(),
                balance,
                amount,
            });
        }
        *self.balances.get_mut(sender).expect("sender checked above") -= amount;
        *self.balances.entry(receiver.to_string()).or_insert(0) += amount;
        Ok(())
    }

    pub fn balance_of(&self, user: &str) -> u64 {
        self.balances.get(user).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    /// Read-only balance map, as consumed by the dashboard collaborator.
    pub fn balances(&self) -> &HashMap<String, u64> {
        &self.balances
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Default for TokenLedger {
    fn default() -> Self {
        Self::new()
    }
}
