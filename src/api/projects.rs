use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, info, warn};

use super::models::{AppState, ProjectEntry, ProjectsResponse, SubmitResponse};
use crate::registry::{self, Submission};

/// List all registered projects (genesis is filtered out by convention).
#[get("/projects/")]
pub async fn get_projects(state: web::Data<AppState>) -> impl Responder {
    let bc = state.chain.lock().expect("mutex poisoned");
    let projects: Vec<ProjectEntry> = bc
        .projects()
        .iter()
        .map(|b| ProjectEntry {
            index: b.index,
            payload: &b.payload,
            hash: &b.hash,
            previous_hash: &b.previous_hash,
        })
        .collect();
    HttpResponse::Ok().json(ProjectsResponse {
        count: projects.len(),
        projects,
    })
}

/// Submit a verified restoration project:
/// - Mine it into the ledger as a new block
/// - Credit the submitter with one token per tonne of CO2 absorbed
/// Both steps run under the same lock scope so no other writer can
/// interleave between append and credit.
#[post("/projects/")]
pub async fn submit_project(
    state: web::Data<AppState>,
    body: web::Json<Submission>,
) -> impl Responder {
    let submission = body.into_inner();
    if submission.submitted_by.trim().is_empty() {
        warn!("POST /projects/ - rejected: empty submitted_by");
        return HttpResponse::BadRequest().body("submitted_by required");
    }
    if submission.project_name.trim().is_empty() {
        warn!("POST /projects/ - rejected: empty project_name");
        return HttpResponse::BadRequest().body("project_name required");
    }
    debug!(
        "POST /projects/ - received '{}' from {} ({} tonnes CO2)",
        submission.project_name, submission.submitted_by, submission.co2_absorbed_tonnes
    );

    let submitted_by = submission.submitted_by.clone();
    let credited = submission.co2_absorbed_tonnes;

    let block = {
        let mut bc = state.chain.lock().expect("mutex poisoned");
        let mut tokens = state.tokens.lock().expect("mutex poisoned");
        match registry::ingest(&mut bc, &mut tokens, submission) {
            Ok(block) => block,
            Err(e) => {
                warn!("POST /projects/ - ingestion failed: {e}");
                return HttpResponse::InternalServerError().body(e.to_string());
            }
        }
    };

    info!(
        "POST /projects/ - block #{} sealed (nonce={})",
        block.index, block.nonce
    );
    HttpResponse::Ok().json(SubmitResponse {
        mined_index: block.index,
        hash: block.hash,
        nonce: block.nonce,
        submitted_by,
        credited,
    })
}
