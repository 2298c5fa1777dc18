//! Infrastructure: settings, the HTTP client and the services built on it

pub mod api_client;
pub mod config;
pub mod services;
pub mod testing;
