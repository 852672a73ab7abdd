// Jobtrack Infrastructure - SQLite store for job records
//
// Listing and statistics are pushed down to SQL; `JobFilter::matches` and
// `SortOrder::compare` in core define the semantics these queries reproduce.

mod connection;
mod job_repository;
mod migration;

pub use connection::create_pool;
pub use job_repository::SqliteJobRepository;
pub use migration::run_migrations;
