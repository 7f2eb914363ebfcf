//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped browser console logging macros
//! - **dom**: `web_sys` boundary helpers (focus, native submit, viewport, resize)

pub mod console_macros;
pub mod dom;

pub use dom::*;
