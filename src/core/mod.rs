//! Core utilities shared across the application.

pub mod http;

pub use http::build_client;
