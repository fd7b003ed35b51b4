//! Response envelope HTTP service library.
//!
//! Exposes the building blocks (config, state, error handling, envelope
//! writing, token verification, routes) so integration tests and the binary
//! entrypoint can both access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod routes;
pub mod state;
