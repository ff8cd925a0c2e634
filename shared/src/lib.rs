//! FitTrack Shared Library
//!
//! Pure domain core used by the backend and the WASM module: health metrics,
//! workout plan generation, progress analytics, validation and API types.

pub mod analytics;
pub mod errors;
pub mod health_metrics;
pub mod types;
pub mod validation;
pub mod workout_plan;

// Re-export commonly used items
pub use analytics::*;
pub use errors::*;
pub use health_metrics::*;
pub use workout_plan::*;
