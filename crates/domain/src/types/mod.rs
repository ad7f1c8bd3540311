//! Request and response payloads, one module per feature area

pub mod auth;
pub mod career;
pub mod chat;
pub mod common;
pub mod flashcards;
pub mod insights;
pub mod math;
pub mod performance;
pub mod relationships;
pub mod reports;
pub mod study_plans;

pub use auth::*;
pub use career::*;
pub use chat::*;
pub use common::{HealthStatus, RawPayload};
pub use flashcards::*;
pub use insights::*;
pub use math::*;
pub use performance::*;
pub use relationships::*;
pub use reports::*;
pub use study_plans::*;
