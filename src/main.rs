use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use helpdesk_api::config;
use helpdesk_api::database::DatabaseManager;
use helpdesk_api::middleware::jwt_auth_middleware;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Helpdesk API in {:?} mode", config.environment);

    // Best effort at startup; /health keeps reporting until the DB is back
    if let Err(e) = DatabaseManager::migrate().await {
        tracing::warn!("skipping migrations, database unavailable: {}", e);
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("HELPDESK_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(5000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Helpdesk API listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    DatabaseManager::close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("shutdown signal received");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_public_routes())
        // Protected API behind JWT middleware
        .merge(protected_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn auth_public_routes() -> Router {
    use axum::routing::post;
    use helpdesk_api::handlers::public::auth;

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
}

fn protected_routes() -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(employee_routes())
        .merge(technician_routes())
        .layer(axum::middleware::from_fn(jwt_auth_middleware))
}

fn auth_routes() -> Router {
    use axum::routing::post;
    use helpdesk_api::handlers::protected::auth;

    Router::new()
        .route("/api/auth/verify", post(auth::verify))
        .route("/api/auth/user-id", post(auth::user_id))
}

fn employee_routes() -> Router {
    use axum::routing::post;
    use helpdesk_api::handlers::protected::employee;

    Router::new()
        .route("/api/employee/get-tickets", post(employee::get_tickets))
        .route("/api/employee/make-ticket", post(employee::make_ticket))
        .route("/api/employee/submit-review", post(employee::submit_review))
}

fn technician_routes() -> Router {
    use axum::routing::post;
    use helpdesk_api::handlers::protected::technician;

    Router::new()
        .route("/api/technician/queue", get(technician::get_queue))
        .route("/api/technician/past-work", get(technician::past_work))
        .route(
            "/api/technician/tickets/:ticket_id/claim",
            post(technician::claim_ticket),
        )
        .route(
            "/api/technician/tickets/:ticket_id/fixed",
            post(technician::mark_fixed),
        )
        .route(
            "/api/technician/tickets/:ticket_id/unassignSelf",
            post(technician::unassign_self),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Helpdesk API",
            "version": version,
            "description": "IT support ticketing REST API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "auth": "/api/auth/register, /api/auth/login (public), /api/auth/verify, /api/auth/user-id (protected)",
                "employee": "/api/employee/get-tickets, /api/employee/make-ticket, /api/employee/submit-review (protected)",
                "technician": "/api/technician/queue, /api/technician/past-work, /api/technician/tickets/:ticket_id/{claim,fixed,unassignSelf} (protected)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
