use serde_json::Value;

use super::{Block, DEFAULT_MAX_MINE_ITERATIONS, GENESIS_PREVIOUS_HASH};
use crate::error::LedgerError;

/// Simple in-memory append-only ledger with Proof-of-Work.
#[derive(Debug)]
pub struct Blockchain {
    pub chain: Vec<Block>,
    difficulty: u32,
    max_mine_iterations: u64,
}

impl Blockchain {
    /// Initialize a new ledger with a genesis block.
    pub fn new(difficulty: u32) -> Self {
        Self::with_mining_guard(difficulty, DEFAULT_MAX_MINE_ITERATIONS)
    }

    /// Initialize with an explicit mining iteration bound.
    pub fn with_mining_guard(difficulty: u32, max_mine_iterations: u64) -> Self {
        let mut bc = Self {
            chain: Vec::new(),
            difficulty,
            max_mine_iterations,
        };
        bc.chain.push(Block::genesis());
        bc
    }

    /// Return the last block in the chain.
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("ledger always holds at least the genesis block")
    }

    /// Mine and append a new block carrying `payload`.
    pub fn append(&mut self, payload: Value) -> Result<&Block, LedgerError> {
        let index = self.last_block().index + 1;
        let prev_hash = self.last_block().hash.clone();

        let mut block = Block::new(index, prev_hash, payload);
        block.mine(self.difficulty, self.max_mine_iterations)?;

        self.chain.push(block);
        Ok(self.last_block())
    }

    /// Validate the entire chain: genesis immutability, linkage, index
    /// monotonicity, hash integrity and PoW on every non-genesis block.
    pub fn is_valid_chain(&self) -> Result<(), LedgerError> {
        let genesis = &self.chain[0];
        if genesis.index != 0 || genesis.previous_hash != GENESIS_PREVIOUS_HASH {
            return Err(LedgerError::InvalidChainLink {
                index: 0,
                reason: "genesis index or previous-hash sentinel altered",
            });
        }
        if genesis.hash != genesis.compute_hash() {
            return Err(LedgerError::InvalidChainLink {
                index: 0,
                reason: "genesis hash does not match its content",
            });
        }

        for i in 1..self.chain.len() {
            let current = &self.chain[i];
            let prev = &self.chain[i - 1];

            if current.previous_hash != prev.hash {
                return Err(LedgerError::InvalidChainLink {
                    index: current.index,
                    reason: "previous-hash does not match predecessor",
                });
            }
            if current.index != prev.index + 1 {
                return Err(LedgerError::InvalidChainLink {
                    index: current.index,
                    reason: "index is not the predecessor's index plus one",
                });
            }
            if !current.is_valid(self.difficulty) {
                return Err(LedgerError::InvalidChainLink {
                    index: current.index,
                    reason: "stored hash or proof-of-work invalid",
                });
            }
        }

        Ok(())
    }

    /// Ordered read-only view of every block except genesis,
    /// as consumed by the dashboard collaborator.
    pub fn projects(&self) -> &[Block] {
        &self.chain[1..]
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }
}

#[cfg(test)]
mod tests {
    use super::Blockchain;
    use crate::error::LedgerError;
    use serde_json::json;

    #[test]
    fn new_ledger_holds_only_genesis() {
        let bc = Blockchain::new(2);
        assert_eq!(bc.len(), 1);
        assert_eq!(bc.last_block().index, 0);
        assert!(bc.projects().is_empty());
        assert!(bc.is_valid_chain().is_ok());
    }

    #[test]
    fn append_links_to_genesis_and_meets_difficulty() {
        let mut bc = Blockchain::new(2);
        let genesis_hash = bc.last_block().hash.clone();

        let block = bc.append(json!({"x": 1})).unwrap();
        assert_eq!(block.index, 1);
        assert_eq!(block.previous_hash, genesis_hash);
        assert!(block.hash.starts_with("00"));
    }

    #[test]
    fn appended_hashes_recompute_identically() {
        let mut bc = Blockchain::new(2);
        bc.append(json!({"a": 1})).unwrap();
        bc.append(json!({"b": 2})).unwrap();

        for b in bc.projects() {
            assert_eq!(b.hash, b.compute_hash());
        }
    }

    #[test]
    fn chain_grows_with_consecutive_indexes() {
        let mut bc = Blockchain::new(1);
        for i in 0..3 {
            bc.append(json!({"n": i})).unwrap();
        }
        assert_eq!(bc.len(), 4);
        for i in 1..bc.len() {
            assert_eq!(bc.chain[i].index, bc.chain[i - 1].index + 1);
            assert_eq!(bc.chain[i].previous_hash, bc.chain[i - 1].hash);
        }
        assert!(bc.is_valid_chain().is_ok());
    }

    #[test]
    fn validation_catches_tampered_payload() {
        let mut bc = Blockchain::new(2);
        bc.append(json!({"x": 1})).unwrap();
        bc.chain[1].payload = json!({"x": 999});

        let err = bc.is_valid_chain().unwrap_err();
        assert!(matches!(err, LedgerError::InvalidChainLink { index: 1, .. }));
    }

    #[test]
    fn validation_catches_broken_linkage() {
        let mut bc = Blockchain::new(1);
        bc.append(json!({"x": 1})).unwrap();
        bc.append(json!({"y": 2})).unwrap();
        bc.chain[2].previous_hash = "bogus".into();

        let err = bc.is_valid_chain().unwrap_err();
        assert!(matches!(err, LedgerError::InvalidChainLink { index: 2, .. }));
    }

    #[test]
    fn append_fails_when_guard_is_tiny() {
        let mut bc = Blockchain::with_mining_guard(8, 3);
        let err = bc.append(json!({"x": 1})).unwrap_err();
        assert!(matches!(err, LedgerError::MiningExhausted { .. }));
        // Nothing was appended
        assert_eq!(bc.len(), 1);
    }
}
