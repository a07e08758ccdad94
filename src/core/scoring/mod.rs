// Core scoring module - combines all violation signals into severities.
// Following the same models/service split as the other core modules.

pub mod scoring_models;
pub mod scoring_service;

pub use scoring_models::*;
pub use scoring_service::*;
