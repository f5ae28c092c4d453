use thiserror::Error;

/// Errors produced by the chain itself (mining and validation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The proof-of-work search hit the configured iteration guard
    /// without finding a valid nonce.
    #[error("mining exhausted after {iterations} iterations")]
    MiningExhausted { iterations: u64 },

    /// Chain validation found a block whose linkage, stored hash or
    /// proof-of-work does not hold up.
    #[error("invalid chain link at block {index}: {reason}")]
    InvalidChainLink { index: u64, reason: &'static str },
}

/// Errors produced by the token ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Transfer rejected; neither balance was touched.
    #[error("insufficient funds: {user} holds {balance}, tried to send {amount}")]
    InsufficientFunds {
        user: String,
        balance: u64,
        amount: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::{LedgerError, TokenError};

    #[test]
    fn errors_render_their_context() {
        let e = LedgerError::MiningExhausted { iterations: 3 };
        assert_eq!(e.to_string(), "mining exhausted after 3 iterations");

        let e = LedgerError::InvalidChainLink {
            index: 2,
            reason: "previous-hash does not match predecessor",
        };
        assert_eq!(
            e.to_string(),
            "invalid chain link at block 2: previous-hash does not match predecessor"
        );

        let e = TokenError::InsufficientFunds {
            user: "NGO_1".into(),
            balance: 80,
            amount: 100,
        };
        assert_eq!(
            e.to_string(),
            "insufficient funds: NGO_1 holds 80, tried to send 100"
        );
    }
}
