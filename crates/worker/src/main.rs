use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod load;

#[derive(Debug, Parser)]
#[command(name = "cotaplan_worker")]
struct Args {
    /// Path to the semicolon-delimited plan CSV.
    #[arg(long, default_value = "operadoras_ficticias.csv")]
    csv: std::path::PathBuf,

    /// Parse and normalize the CSV without writing to the database.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = cotaplan_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();
    let source_file = args.csv.display().to_string();

    let plans = load::load_plans(&args.csv)?;
    anyhow::ensure!(!plans.is_empty(), "CSV at {source_file} contained no plan rows");

    if args.dry_run {
        tracing::info!(
            source_file = %source_file,
            dry_run = true,
            rows = plans.len(),
            "CSV parsed and normalized; skipping database write"
        );
        return Ok(());
    }

    let db_url = settings.require_database_url()?;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await
        .context("connect DATABASE_URL failed")?;

    cotaplan_core::storage::migrate(&pool).await?;

    let acquired = cotaplan_core::storage::lock::try_acquire_ingest_lock(&pool).await?;
    if !acquired {
        tracing::warn!(source_file = %source_file, "ingest lock not acquired; another load in progress");
        return Ok(());
    }

    // The audit insert must never mask the load outcome or skip the lock
    // release, so recording failures are logged and swallowed.
    let outcome = match cotaplan_core::storage::plans::replace_all(&pool, &plans).await {
        Ok(inserted) => {
            match cotaplan_core::storage::ingest_runs::record_ingest_run(
                &pool,
                &source_file,
                "success",
                None,
                inserted as i64,
            )
            .await
            {
                Ok(run_id) => {
                    tracing::info!(source_file = %source_file, %run_id, rows = inserted, "planos table reloaded");
                }
                Err(rec_err) => {
                    tracing::warn!(source_file = %source_file, rows = inserted, error = %rec_err, "planos table reloaded but run not recorded");
                }
            }
            Ok(())
        }
        Err(err) => {
            sentry_anyhow::capture_anyhow(&err);
            if let Err(rec_err) = cotaplan_core::storage::ingest_runs::record_ingest_run(
                &pool,
                &source_file,
                "error",
                Some(&format!("{err:#}")),
                0,
            )
            .await
            {
                tracing::warn!(source_file = %source_file, error = %rec_err, "ingest run not recorded");
            }

            tracing::error!(source_file = %source_file, error = %err, "plan ingest failed");
            Err(err)
        }
    };

    let _ = cotaplan_core::storage::lock::release_ingest_lock(&pool).await;
    outcome
}

fn init_sentry(settings: &cotaplan_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
