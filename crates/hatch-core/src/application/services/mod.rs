//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "write a plan to disk".

pub mod generate_service;
pub mod materializer;

pub use generate_service::GenerateService;
pub use materializer::{GenerationResult, Materializer};
