use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cotaplan_core::domain::quotation::{QuotationRequest, QuotationResult};
use cotaplan_core::engine::service::{QuotationService, QuoteError};
use cotaplan_core::storage::plans::PgPlanRepository;

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

    let pool: Option<PgPool> = match settings.require_database_url() {
        Ok(db_url) => match sqlx::postgres::PgPoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await
        {
            Ok(pool) => match cotaplan_core::storage::migrate(&pool).await {
                Ok(()) => Some(pool),
                Err(e) => {
                    sentry_anyhow::capture_anyhow(&e);
                    tracing::error!(error = %e, "db migrations failed; starting API in degraded mode");
                    None
                }
            },
            Err(e) => {
                let err = anyhow::Error::new(e);
                sentry_anyhow::capture_anyhow(&err);
                tracing::error!(error = %err, "db connect failed; starting API in degraded mode");
                None
            }
        },
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "DATABASE_URL missing; starting API in degraded mode");
            None
        }
    };

    let state = AppState { pool };

    // The browser frontend is served from a different origin, so CORS stays
    // wide open here.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/cotacao", post(criar_cotacao))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Clone)]
struct AppState {
    pool: Option<PgPool>,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    detail: String,
}

fn error_response(status: StatusCode, detail: &str) -> (StatusCode, Json<ErrorDetail>) {
    (
        status,
        Json(ErrorDetail {
            detail: detail.to_string(),
        }),
    )
}

async fn criar_cotacao(
    State(state): State<AppState>,
    Json(req): Json<QuotationRequest>,
) -> Result<Json<QuotationResult>, (StatusCode, Json<ErrorDetail>)> {
    // Boundary validation; the engine itself only sees positive headcounts.
    if req.vidas < 1 {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Quantidade de vidas não suportada",
        ));
    }

    let Some(pool) = &state.pool else {
        return Err(error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Banco de dados indisponível",
        ));
    };

    let service = QuotationService::new(PgPlanRepository::new(pool.clone()));

    match service.quote(&req).await {
        Ok(result) => Ok(Json(result)),
        Err(QuoteError::UnsupportedHeadcount { .. }) => Err(error_response(
            StatusCode::BAD_REQUEST,
            "Quantidade de vidas não suportada",
        )),
        Err(QuoteError::Repository(err)) => {
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(error = %err, "quotation failed against the plan repository");
            Err(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao consultar os planos",
            ))
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
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
