// Domain models for plans, athletes and progress

pub mod athlete_profile;
pub mod training_plan;
pub mod training_progress;
pub mod weekday;
pub mod workout;

pub use athlete_profile::*;
pub use training_plan::*;
pub use training_progress::*;
pub use weekday::*;
pub use workout::*;
