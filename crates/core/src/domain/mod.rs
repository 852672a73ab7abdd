// Domain Layer - Pure business logic and entities

pub mod error;
pub mod filter;
pub mod job;
pub mod pagination;
pub mod sort;
pub mod stats;

// Re-exports
pub use error::DomainError;
pub use filter::{Criterion, JobFilter, MATCH_ALL};
pub use job::{Job, JobId, JobStatus, JobType, OwnerId};
pub use pagination::{JobPage, PageRequest};
pub use sort::{SortDirection, SortField, SortKey, SortOrder};
pub use stats::{JobStats, MonthBucket, MonthlyApplications, MonthlyCount, StatusSummary};
