use crate::blockchain::Blockchain;
use crate::token::TokenLedger;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Shared application state: one ledger and one token ledger per process,
/// each behind its own mutex so handler calls stay serialized.
pub struct AppState {
    pub chain: Mutex<Blockchain>,
    pub tokens: Mutex<TokenLedger>,
}

impl AppState {
    pub fn with_difficulty(difficulty: u32) -> Self {
        Self {
            chain: Mutex::new(Blockchain::new(difficulty)),
            tokens: Mutex::new(TokenLedger::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        use crate::blockchain::DEFAULT_DIFFICULTY;
        Self::with_difficulty(DEFAULT_DIFFICULTY)
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub length: usize,
    pub difficulty: u32,
    pub chain: &'a [crate::blockchain::Block],
}

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
    pub difficulty: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/* ---------- Project API Models ---------- */

/// Dashboard view of one registered project (genesis never appears here).
#[derive(Serialize)]
pub struct ProjectEntry<'a> {
    pub index: u64,
    pub payload: &'a Value,
    pub hash: &'a str,
    pub previous_hash: &'a str,
}

#[derive(Serialize)]
pub struct ProjectsResponse<'a> {
    pub count: usize,
    pub projects: Vec<ProjectEntry<'a>>,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub mined_index: u64,
    pub hash: String,
    pub nonce: u64,
    pub submitted_by: String,
    pub credited: u64,
}

/* ---------- Token API Models ---------- */

#[derive(Serialize)]
pub struct BalancesResponse<'a> {
    pub total_supply: u64,
    pub balances: &'a HashMap<String, u64>,
}

#[derive(Serialize)]
pub struct BalanceResponse {
    pub user: String,
    pub balance: u64,
}

#[derive(Deserialize)]
pub struct TransferRequest {
    pub sender: String,
    pub receiver: String,
    pub amount: u64,
}

#[derive(Serialize)]
pub struct TransferResponse {
    pub sender: String,
    pub receiver: String,
    pub amount: u64,
    pub sender_balance: u64,
    pub receiver_balance: u64,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub height: usize,
    pub difficulty: u32,
    pub projects: usize,
    pub token_name: String,
    pub token_symbol: String,
    pub total_supply: u64,
    pub holders: usize,
}
