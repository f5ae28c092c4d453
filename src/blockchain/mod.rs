pub mod block;
pub mod model;

pub use block::Block;
pub use model::Blockchain;

/// Default Proof-of-Work difficulty (number of leading zeros).
pub const DEFAULT_DIFFICULTY: u32 = 2;

/// Sentinel previous-hash of the genesis block.
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Payload stored in the genesis block.
pub const GENESIS_PAYLOAD: &str = "Genesis Block";

/// Default mining iteration guard. Effectively unbounded for the dev
/// difficulty range; hardened deployments pass a finite bound and get
/// `LedgerError::MiningExhausted` instead of a runaway loop.
pub const DEFAULT_MAX_MINE_ITERATIONS: u64 = u64::MAX;
