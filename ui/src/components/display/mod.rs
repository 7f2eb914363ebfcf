pub mod loading_indicator;
pub mod toast;
pub mod validation_feedback;

pub use loading_indicator::*;
pub use toast::*;
pub use validation_feedback::*;
