use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{
    AppState, BalanceResponse, BalancesResponse, TransferRequest, TransferResponse,
};

/// Full balance map plus current supply.
#[get("/balances/")]
pub async fn get_balances(state: web::Data<AppState>) -> impl Responder {
    let tokens = state.tokens.lock().expect("mutex poisoned");
    let resp = BalancesResponse {
        total_supply: tokens.total_supply(),
        balances: tokens.balances(),
    };
    HttpResponse::Ok().json(resp)
}

/// Single user balance; unknown users read as zero.
#[get("/balance/{user}/")]
pub async fn get_balance(state: web::Data<AppState>, path: web::Path<(String,)>) -> impl Responder {
    let user = path.into_inner().0;
    let balance = {
        let tokens = state.tokens.lock().expect("mutex poisoned");
        tokens.balance_of(&user)
    };
    HttpResponse::Ok().json(BalanceResponse { user, balance })
}

/// Move tokens between users. Insufficient funds is a plain 400, never a
/// fault; balances stay untouched on failure.
#[post("/transfer/")]
pub async fn post_transfer(
    state: web::Data<AppState>,
    body: web::Json<TransferRequest>,
) -> impl Responder {
    let req = body.into_inner();
    if req.sender.trim().is_empty() || req.receiver.trim().is_empty() {
        return HttpResponse::BadRequest().body("sender and receiver required");
    }
    if req.amount == 0 {
        return HttpResponse::BadRequest().body("amount must be > 0");
    }

    let mut tokens = state.tokens.lock().expect("mutex poisoned");
    match tokens.transfer(&req.sender, &req.receiver, req.amount) {
        Ok(()) => {
            info!(
                "TRANSFER - {} -> {} ({} {})",
                req.sender,
                req.receiver,
                req.amount,
                tokens.symbol()
            );
            HttpResponse::Ok().json(TransferResponse {
                sender_balance: tokens.balance_of(&req.sender),
                receiver_balance: tokens.balance_of(&req.receiver),
                sender: req.sender,
                receiver: req.receiver,
                amount: req.amount,
            })
        }
        Err(e) => {
            warn!("TRANSFER - rejected: {e}");
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}
