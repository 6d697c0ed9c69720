use anyhow::Context;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Records one worker execution so operators can audit loads. `status` is
/// either "success" or "error".
pub async fn record_ingest_run(
    pool: &sqlx::PgPool,
    source_file: &str,
    status: &str,
    error: Option<&str>,
    rows_loaded: i64,
) -> anyhow::Result<Uuid> {
    let id = Uuid::new_v4();
    let finished_at: DateTime<Utc> = Utc::now();

    sqlx::query(
        "INSERT INTO ingest_runs (id, finished_at, source_file, status, error, rows_loaded) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .persistent(false)
    .bind(id)
    .bind(finished_at)
    .bind(source_file)
    .bind(status)
    .bind(error)
    .bind(rows_loaded)
    .execute(pool)
    .await
    .context("insert ingest_runs failed")?;

    Ok(id)
}
