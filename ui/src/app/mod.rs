//! Page-level components: the shared shell and one component per page.

pub mod pages;
pub mod shell;

pub use pages::*;
pub use shell::*;
