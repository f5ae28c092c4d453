use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

use super::{GENESIS_PAYLOAD, GENESIS_PREVIOUS_HASH};
use crate::error::LedgerError;

/// A single block in the registry ledger holding one submission payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: i64, // Unix timestamp (UTC)
    pub payload: Value,
    pub previous_hash: String,
    pub nonce: u64,   // Proof-of-Work nonce
    pub hash: String, // Cached hash of the block
}

impl Block {
    /// Create the genesis block (first block in the chain).
    /// Genesis is stored unmined; difficulty is not enforced on it.
    pub fn genesis() -> Self {
        let mut block = Self {
            index: 0,
            timestamp: Utc::now().timestamp(),
            payload: Value::String(GENESIS_PAYLOAD.to_string()),
            previous_hash: String::from(GENESIS_PREVIOUS_HASH),
            nonce: 0,
            hash: String::new(),
        };
        block.hash = block.compute_hash();
        block
    }

    /// Create a new block (not mined yet). Call `mine()` to perform PoW.
    pub fn new(index: u64, previous_hash: String, payload: Value) -> Self {
        let mut block = Self {
            index,
            timestamp: Utc::now().timestamp(),
            payload,
            previous_hash,
            nonce: 0,
            hash: String::new(),
        };
        block.hash = block.compute_hash();
        block
    }

    /// Compute the SHA-256 hash of this block using its fields
    /// (excluding the `hash` field itself). The preimage is a canonical
    /// JSON object with sorted keys, so the same logical content always
    /// yields the same digest regardless of field order.
    pub fn compute_hash(&self) -> String {
        let preimage = serde_json::json!({
            "index": self.index,
            "timestamp": self.timestamp,
            "payload": self.payload,
            "previous_hash": self.previous_hash,
            "nonce": self.nonce,
        });
        let bytes = serde_json::to_vec(&preimage).expect("serialize block preimage");
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hasher.finalize();
        hex::encode(digest)
    }

    /// Perform Proof-of-Work by finding a nonce that yields a hash
    /// starting with `difficulty` leading zeros (in hex). Gives up with
    /// `MiningExhausted` once `max_iterations` nonces have been tried.
    pub fn mine(&mut self, difficulty: u32, max_iterations: u64) -> Result<(), LedgerError> {
        let target_prefix = "0".repeat(difficulty as usize);
        self.nonce = 0;
        let mut iterations: u64 = 0;
        loop {
            self.hash = self.compute_hash();
            if self.hash.starts_with(&target_prefix) {
                return Ok(());
            }
            iterations += 1;
            if iterations >= max_iterations {
                return Err(LedgerError::MiningExhausted { iterations });
            }
            self.nonce = self.nonce.wrapping_add(1);
        }
    }

    /// Validate that the block's cached `hash` matches its content and
    /// satisfies the PoW difficulty. (Does NOT validate chain linkage.)
    pub fn is_valid(&self, difficulty: u32) -> bool {
        let expected = self.compute_hash();
        if self.hash != expected {
            return false;
        }
        self.hash
            .chars()
            .take(difficulty as usize)
            .all(|c| c == '0')
    }
}
