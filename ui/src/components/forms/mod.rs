pub mod password_reset_form;
pub mod search_form;

pub use password_reset_form::*;
pub use search_form::*;
