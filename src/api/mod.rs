//! HTTP API module

pub mod handlers;
pub mod routes;
