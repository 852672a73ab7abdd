// Port Layer - Interfaces for external dependencies

pub mod id_provider;
pub mod job_repository;
pub mod time_provider;

// Re-exports
pub use id_provider::{IdProvider, UuidProvider};
pub use job_repository::JobRepository;
pub use time_provider::{SystemClock, TimeProvider};
