//! Corrections API — Shared Library
//!
//! This crate contains the configuration, collaborators, models and
//! request handling used across all API handlers.
//!
//! Each serverless function in `api/` imports from this library
//! to keep handlers thin and logic reusable.

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod models;
pub mod store;
pub mod telemetry;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn service_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}
