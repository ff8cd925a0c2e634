//! Business logic services
//!
//! Services validate request bodies, call the repositories and map their
//! errors to `ApiError`.

pub mod health_profile;
pub mod measurement;
pub mod progress;
pub mod user;
pub mod workout;

pub use health_profile::HealthProfileService;
pub use measurement::MeasurementService;
pub use progress::ProgressService;
pub use user::UserService;
pub use workout::WorkoutService;
