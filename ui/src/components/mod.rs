//! User Interface Components
//!
//! Reusable Dioxus components for the three page widgets:
//!
//! - **forms**: search fallback form and password reset form
//! - **display**: notifications, inline feedback and loading indicators
//! - **inputs**: validated input fields
//! - **layout**: collapsible sidebar
//!
//! Components own only rendering and DOM side effects; transitions live in
//! `crate::features`.

pub mod display;
pub mod forms;
pub mod inputs;
pub mod layout;
