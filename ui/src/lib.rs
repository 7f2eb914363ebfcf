//! Shared UI for the search, password reset and sidebar widgets.

pub mod app;
pub use app::{AppShell, PasswordResetPage, SearchPage};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
