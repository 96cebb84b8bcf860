pub mod api;
pub mod components;
pub mod core;
pub mod easing;
pub mod feedbacks;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::feedback::Feedback;
pub use api::types::{PlayDirection, TargetId};
pub use components::target::Target;
pub use crate::core::stage::Stage;
pub use crate::core::time::FixedTimestep;
pub use easing::{ease, ease_vec3, lerp, lerp_vec3, Curve, CurveFamily, EaseMode};
pub use feedbacks::scale::{EndValue, ScaleConfig, ScaleFeedback, ScaleMode, StartValue, Timing};
pub use systems::runner::FeedbackRunner;
