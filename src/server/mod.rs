//! Axum-based HTTP server for the fridge-chef gateway.
//!
//! # Components
//!
//! - `handlers`: The analyze, health and metrics endpoints.
//! - `middleware`: Request IDs, CORS, metrics and panic recovery.
//! - `routes`: The router that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use routes::{create_router, AppState};
