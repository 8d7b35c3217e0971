//! API endpoint handlers.
//!
//! Each module is a thin adapter from JSON to the core functions; none
//! of them hold state beyond the shared `ApiContext`.

pub mod assessments;
pub mod assistant;
pub mod conditions;
pub mod documents;
pub mod health;
pub mod predict;
pub mod safety;
pub mod symptoms;
