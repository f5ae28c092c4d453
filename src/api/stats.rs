use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, StatsResponse};

#[get("/stats/")]
pub async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    // Short, separate locks; neither half needs the other.
    let (height, difficulty, projects) = {
        let bc = state.chain.lock().expect("mutex poisoned");
        (bc.len(), bc.difficulty(), bc.projects().len())
    };
    let (token_name, token_symbol, total_supply, holders) = {
        let tokens = state.tokens.lock().expect("mutex poisoned");
        (
            tokens.name().to_string(),
            tokens.symbol().to_string(),
            tokens.total_supply(),
            tokens.balances().len(),
        )
    };

    HttpResponse::Ok().json(StatsResponse {
        height,
        difficulty,
        projects,
        token_name,
        token_symbol,
        total_supply,
        holders,
    })
}
