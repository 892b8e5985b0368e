//! # moda-api
//!
//! HTTP API exposing moda profile reads over axum.

pub mod handlers;
pub mod routes;
pub mod server;

pub use server::{ApiServer, AppState};
