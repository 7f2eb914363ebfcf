pub mod hooks;
pub mod policy;
pub mod types;

pub use hooks::*;
pub use policy::*;
pub use types::*;
