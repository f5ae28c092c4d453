mod balance;
mod chain;
mod health;
pub mod models;
mod projects;
mod stats;

use actix_web::web::{self, ServiceConfig};

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health::health_check)
            .service(chain::get_chain)
            .service(chain::validate_chain)
            .service(projects::get_projects)
            .service(projects::submit_project)
            .service(balance::get_balances)
            .service(balance::get_balance)
            .service(balance::post_transfer)
            .service(stats::get_stats),
    );
}
