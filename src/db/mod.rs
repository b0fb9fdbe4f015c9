//! Data access layer: models and single-statement query wrappers
//!
//! Every operation performs exactly one database round-trip and settles
//! with either data or a short descriptive error. No batching, caching,
//! or cross-operation composition.

pub mod courses;
pub mod init;
pub mod models;
pub mod students;

pub use courses::*;
pub use init::*;
pub use models::*;
pub use students::*;
