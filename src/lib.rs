//! unicornd - a tiny HTTP service that hands out random unicorns
//!
//! Three endpoints are served:
//! - `/` greets the caller with the local host name
//! - `/health` answers load-balancer health checks
//! - `/unicorn` returns a freshly generated unicorn (name, age, color)

pub mod api;
pub mod config;
pub mod creature;
pub mod error;
pub mod random;
pub mod server;

pub use error::{Error, Result};
