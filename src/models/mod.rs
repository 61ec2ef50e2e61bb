//! Domain models for the editable list endpoint.
//!
//! These types are shared across the handler, the authenticator and the store.

pub mod request;
pub mod row;
