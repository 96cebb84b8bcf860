// feedbacks/mod.rs
//
// Concrete feedback implementations. Each one implements the `Feedback`
// contract from `api` and owns nothing but its configuration and per-run
// session state.

pub mod scale;

pub use scale::{EndValue, ScaleConfig, ScaleFeedback, ScaleMode, StartValue, Timing};
