//! Infrastructure Services
//!
//! - **config**: widget configuration with JSON overrides
//! - **errors**: boundary error types
//! - **storage**: sidebar preference persistence
//!
//! WASM-first; native builds use the in-memory store and inert DOM helpers.

pub mod config;
pub mod errors;
pub mod storage;
