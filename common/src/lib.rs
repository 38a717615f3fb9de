//! Shared survey domain logic for the NeuroWell client: field schema,
//! validation, prediction-text parsing, and the recommendation engine.

pub mod model;
pub mod prediction;
pub mod recommend;
pub mod requests;
pub mod schema;
pub mod validate;
