use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
mod plan;
mod prompts;

pub fn router() -> Router<AppState> {
    handlers::advisor_routes()
}
