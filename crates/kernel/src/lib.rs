//! Shelfmark Kernel Library
//!
//! Navigation menus, deposition forms, and usage statistics models for the
//! Shelfmark digital library. The `shelfmark` binary serves them over HTTP.

pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod menu;
pub mod models;
pub mod routes;
pub mod routing;
pub mod state;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
