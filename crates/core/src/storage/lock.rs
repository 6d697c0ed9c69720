use anyhow::Context;

// Session-scoped Postgres advisory lock guarding against two ingest runs
// rewriting the planos table at the same time.
const INGEST_LOCK_KEY: i64 = 0x434F_5441_504C; // "COTAPL" as hex-ish namespace.

pub async fn try_acquire_ingest_lock(pool: &sqlx::PgPool) -> anyhow::Result<bool> {
    let acquired: (bool,) = sqlx::query_as("SELECT pg_try_advisory_lock($1)")
        .persistent(false)
        .bind(INGEST_LOCK_KEY)
        .fetch_one(pool)
        .await
        .with_context(|| format!("failed to acquire ingest lock (key={INGEST_LOCK_KEY})"))?;
    Ok(acquired.0)
}

pub async fn release_ingest_lock(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    sqlx::query("SELECT pg_advisory_unlock($1)")
        .persistent(false)
        .bind(INGEST_LOCK_KEY)
        .execute(pool)
        .await
        .with_context(|| format!("failed to release ingest lock (key={INGEST_LOCK_KEY})"))?;
    Ok(())
}
