use actix_web::{HttpResponse, Responder, get, web};
use log::warn;

use super::models::{AppState, ChainResponse, ValidateResponse};

/// Get the full raw chain, genesis included (diagnostic view).
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.chain.lock().expect("mutex poisoned");
    let resp = ChainResponse {
        length: bc.len(),
        difficulty: bc.difficulty(),
        chain: &bc.chain,
    };
    HttpResponse::Ok().json(resp)
}

/// Validate the whole chain: linkage, hashes and PoW.
#[get("/validate/")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let bc = state.chain.lock().expect("mutex poisoned");
    let result = bc.is_valid_chain();
    if let Err(ref e) = result {
        warn!("VALIDATE - chain check failed: {e}");
    }
    let resp = ValidateResponse {
        valid: result.is_ok(),
        length: bc.len(),
        difficulty: bc.difficulty(),
        error: result.err().map(|e| e.to_string()),
    };
    HttpResponse::Ok().json(resp)
}
