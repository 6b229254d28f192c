//! Forum API - discussion threads, comments, and replies over REST.
//!
//! Layered clean architecture: domain entities validate payloads, use-case
//! orchestrators run the authorization pipeline against repository ports,
//! and adapters bind the ports to PostgreSQL, JWT, and axum.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
