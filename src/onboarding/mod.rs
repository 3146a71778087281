use crate::state::AppState;
use axum::Router;

pub mod analysis;
mod dto;
pub mod handlers;
pub mod repo;
mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::onboarding_routes()
}
