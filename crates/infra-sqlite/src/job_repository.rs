// SQLite JobRepository Implementation

use async_trait::async_trait;
use jobtrack_core::domain::filter::fold_case;
use jobtrack_core::domain::{
    Criterion, Job, JobFilter, JobStatus, MonthBucket, MonthlyCount, PageRequest, SortDirection,
    SortField, SortOrder,
};
use jobtrack_core::error::{AppError, Result};
use jobtrack_core::port::JobRepository;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::fmt::Display;
use tracing::debug;

// Helper to convert sqlx::Error to AppError with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            // SQLite error codes: https://www.sqlite.org/rescode.html
            match db_err.code().as_deref() {
                Some(code @ ("2067" | "1555")) => AppError::Database(format!(
                    "Unique constraint violation: {} ({})",
                    db_err.message(),
                    code
                )),
                Some(code @ "275") => AppError::Database(format!(
                    "Check constraint violation: {} ({})",
                    db_err.message(),
                    code
                )),
                Some("5") => AppError::Database(format!(
                    "Database locked (SQLITE_BUSY): {}",
                    db_err.message()
                )),
                Some("13") => AppError::Database(format!("Database full: {}", db_err.message())),
                Some(code) => AppError::Database(format!(
                    "Database error [{}]: {}",
                    code,
                    db_err.message()
                )),
                None => AppError::Database(format!("Database error: {}", db_err.message())),
            }
        }
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        // Connection, pool, protocol errors
        _ => AppError::Database(err.to_string()),
    }
}

const SELECT_JOBS: &str = "SELECT id, owner_id, company, position, status, job_type, created_at, updated_at FROM jobs";

pub struct SqliteJobRepository {
    pool: SqlitePool,
}

impl SqliteJobRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Append the WHERE clause equivalent to `JobFilter::matches`.
fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &JobFilter) {
    qb.push(" WHERE owner_id = ").push_bind(filter.owner_id.clone());

    // instr() is a literal substring test: no LIKE wildcards, no regex.
    // position_folded holds fold_case(position); SQLite lower() is ASCII-only.
    if let Some(needle) = filter.search_folded() {
        qb.push(" AND instr(position_folded, ").push_bind(needle).push(") > 0");
    }

    push_criterion(qb, "job_type", &filter.job_type);
    push_criterion(qb, "status", &filter.status);
}

fn push_criterion<T: Display>(
    qb: &mut QueryBuilder<'_, Sqlite>,
    column: &'static str,
    criterion: &Criterion<T>,
) {
    match criterion {
        Criterion::Any => {}
        Criterion::Only(value) => {
            qb.push(" AND ")
                .push(column)
                .push(" = ")
                .push_bind(value.to_string());
        }
        Criterion::Nothing => {
            qb.push(" AND 0");
        }
    }
}

fn push_order(qb: &mut QueryBuilder<'_, Sqlite>, order: Option<SortOrder>) {
    let Some(order) = order else {
        // Natural order: insertion
        qb.push(" ORDER BY rowid");
        return;
    };

    let column = match order.field {
        SortField::CreatedAt => "created_at",
        SortField::Position => "position",
    };
    let direction = match order.direction {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    };

    qb.push(format!(" ORDER BY {column} {direction}, id {direction}"));
}

#[async_trait]
impl JobRepository for SqliteJobRepository {
    async fn insert(&self, job: &Job) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO jobs (
                id, owner_id, company, position, position_folded, status, job_type,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&job.id)
        .bind(&job.owner_id)
        .bind(&job.company)
        .bind(&job.position)
        .bind(fold_case(&job.position))
        .bind(job.status.as_str())
        .bind(job.job_type.as_str())
        .bind(job.created_at)
        .bind(job.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_owned(&self, owner_id: &str, id: &str) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "{} WHERE id = ? AND owner_id = ?",
            SELECT_JOBS
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(JobRow::into_job).transpose()
    }

    async fn update(&self, job: &Job) -> Result<bool> {
        // created_at is never written after insert
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET company = ?, position = ?, position_folded = ?, status = ?, job_type = ?,
                updated_at = ?
            WHERE id = ? AND owner_id = ?
            "#,
        )
        .bind(&job.company)
        .bind(&job.position)
        .bind(fold_case(&job.position))
        .bind(job.status.as_str())
        .bind(job.job_type.as_str())
        .bind(job.updated_at)
        .bind(&job.id)
        .bind(&job.owner_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_owned(&self, owner_id: &str, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_matching(
        &self,
        filter: &JobFilter,
        order: Option<SortOrder>,
        page: PageRequest,
    ) -> Result<Vec<Job>> {
        let mut qb = QueryBuilder::<Sqlite>::new(SELECT_JOBS);
        push_filter(&mut qb, filter);
        push_order(&mut qb, order);
        qb.push(" LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.skip());

        debug!(sql = qb.sql(), "find_matching");

        let rows: Vec<JobRow> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(JobRow::into_job).collect()
    }

    async fn count_matching(&self, filter: &JobFilter) -> Result<i64> {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM jobs");
        push_filter(&mut qb, filter);

        qb.build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn count_by_status(&self, owner_id: &str) -> Result<Vec<(JobStatus, i64)>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT status, COUNT(*) FROM jobs
            WHERE owner_id = ?
            GROUP BY status
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(|(status, count)| Ok((parse_column(&status)?, count)))
            .collect()
    }

    async fn latest_monthly_counts(&self, owner_id: &str, limit: usize) -> Result<Vec<MonthlyCount>> {
        // created_at is epoch ms, bucketed in UTC
        let rows: Vec<(i64, i64, i64)> = sqlx::query_as(
            r#"
            SELECT
                CAST(strftime('%Y', created_at / 1000.0, 'unixepoch') AS INTEGER) AS year,
                CAST(strftime('%m', created_at / 1000.0, 'unixepoch') AS INTEGER) AS month,
                COUNT(*) AS count
            FROM jobs
            WHERE owner_id = ?
            GROUP BY year, month
            ORDER BY year DESC, month DESC
            LIMIT ?
            "#,
        )
        .bind(owner_id)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter()
            .map(|(year, month, count)| {
                let bucket = i32::try_from(year)
                    .ok()
                    .zip(u32::try_from(month).ok())
                    .and_then(|(y, m)| MonthBucket::new(y, m))
                    .ok_or_else(|| {
                        AppError::Database(format!("Invalid month bucket {}-{}", year, month))
                    })?;
                Ok(MonthlyCount { bucket, count })
            })
            .collect()
    }
}

fn parse_column<T>(value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|e: T::Err| AppError::Database(format!("Corrupt column value: {}", e)))
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct JobRow {
    id: String,
    owner_id: String,
    company: String,
    position: String,
    status: String,
    job_type: String,
    created_at: i64,
    updated_at: i64,
}

impl JobRow {
    fn into_job(self) -> Result<Job> {
        Ok(Job {
            status: parse_column(&self.status)?,
            job_type: parse_column(&self.job_type)?,
            id: self.id,
            owner_id: self.owner_id,
            company: self.company,
            position: self.position,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
