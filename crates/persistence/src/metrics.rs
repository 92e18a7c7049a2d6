//! Query timing and connection pool gauges.
//!
//! Repositories run their queries through [`observe`], which records the
//! duration and the outcome of every statement under its query name.

use metrics::{counter, gauge, histogram};
use sqlx::postgres::{PgQueryResult, PgRow};
use sqlx::PgPool;
use std::future::Future;
use std::time::Instant;

use crate::entities::{BlogPostEntity, ContactEntity, UserEntity, VideoEntity};

/// How a query ended, recorded as the `outcome` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    Ok,
    /// No row matched: an empty lookup, or a write that touched nothing.
    NotFound,
    Error,
}

impl QueryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOutcome::Ok => "ok",
            QueryOutcome::NotFound => "not_found",
            QueryOutcome::Error => "error",
        }
    }

    pub fn of<T: Observed>(result: &Result<T, sqlx::Error>) -> Self {
        match result {
            Ok(value) => value.outcome(),
            Err(sqlx::Error::RowNotFound) => QueryOutcome::NotFound,
            Err(_) => QueryOutcome::Error,
        }
    }
}

/// Query output that can be classified into a [`QueryOutcome`].
pub trait Observed {
    fn outcome(&self) -> QueryOutcome {
        QueryOutcome::Ok
    }
}

impl<T> Observed for Option<T> {
    fn outcome(&self) -> QueryOutcome {
        match self {
            Some(_) => QueryOutcome::Ok,
            None => QueryOutcome::NotFound,
        }
    }
}

impl Observed for PgQueryResult {
    fn outcome(&self) -> QueryOutcome {
        if self.rows_affected() > 0 {
            QueryOutcome::Ok
        } else {
            QueryOutcome::NotFound
        }
    }
}

// An empty list is still a successful read.
impl<T> Observed for Vec<T> {}
impl Observed for PgRow {}
impl Observed for BlogPostEntity {}
impl Observed for ContactEntity {}
impl Observed for UserEntity {}
impl Observed for VideoEntity {}

/// Awaits `query`, recording `database_query_duration_seconds` and
/// `database_queries_total` labelled with `query` and `outcome`.
pub async fn observe<T, F>(query: &'static str, run: F) -> Result<T, sqlx::Error>
where
    T: Observed,
    F: Future<Output = Result<T, sqlx::Error>>,
{
    let start = Instant::now();
    let result = run.await;
    record_query(query, QueryOutcome::of(&result), start.elapsed().as_secs_f64());
    result
}

fn record_query(query: &'static str, outcome: QueryOutcome, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "query" => query,
        "outcome" => outcome.as_str()
    )
    .record(duration_secs);

    counter!(
        "database_queries_total",
        "query" => query,
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

/// Samples the connection pool gauges. Called on every `/metrics` scrape.
pub fn record_pool_metrics(pool: &PgPool) {
    let total = pool.size() as usize;
    let idle = pool.num_idle();

    gauge!("database_connections_active").set(total.saturating_sub(idle) as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(total as f64);
}
