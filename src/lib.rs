//! Recetario: preference-based recipe recommendations over a small REST API.

pub mod auth;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use routes::{AppState, router};
