pub mod dto;
pub mod handlers;
pub mod repo;
pub mod services;

#[cfg(test)]
pub mod testing;

use axum::{
    routing::{any, get},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", any(handlers::log_food_entry))
        .route("/health", get(handlers::health))
}
