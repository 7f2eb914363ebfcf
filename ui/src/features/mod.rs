//! Page Widgets
//!
//! Pure state and transition logic for each widget, free of Dioxus so it can
//! be unit tested natively:
//!
//! - **search**: network target classifier and the search fallback guard
//! - **password_reset**: reset policy, form state and optional page helpers
//! - **sidebar**: collapse state with the mobile override and hover peek

pub mod password_reset;
pub mod search;
pub mod sidebar;
