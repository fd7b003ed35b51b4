//! Authentication primitives.
//!
//! - [`jwt`] -- RS256 access-token verification against the issuer's public key.

pub mod jwt;
