use axum::{
    Router,
    extract::{DefaultBodyLimit, Extension},
    middleware,
    routing::{get, post},
};
use leadflow::agents::handlers::{handle_add_agent, handle_list_agents};
use leadflow::auth::handlers::{handle_login, handle_register};
use leadflow::auth::middleware::{require_admin, require_auth};
use leadflow::auth::token::TokenKeys;
use leadflow::distribution::handlers::handle_upload;
use leadflow::storage::Store;
use leadflow::tasks::handlers::{handle_agent_tasks, handle_list_tasks};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:5000".parse()?;
    let mut secret: Option<String> = std::env::var("JWT_SECRET").ok();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--secret" => {
                secret = Some(args[i + 1].clone());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let Some(secret) = secret else {
        eprintln!("Usage: {} [--bind <addr:port>] --secret <jwt secret>", args[0]);
        eprintln!("The secret may also be supplied via the JWT_SECRET env var.");
        std::process::exit(1);
    };

    // 1. Shared state:
    let store = Arc::new(Store::new());
    let keys = Arc::new(TokenKeys::new(&secret));

    // 2. Protected routes; admin gate runs inside the auth gate:
    let admin_routes = Router::new()
        .route("/api/agents/add", post(handle_add_agent))
        .route("/api/agents", get(handle_list_agents))
        .route(
            "/api/upload",
            post(handle_upload).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/api/tasks", get(handle_list_tasks))
        .layer(middleware::from_fn(require_admin));

    let protected_routes = Router::new()
        .merge(admin_routes)
        .route("/api/tasks/agent/:id", get(handle_agent_tasks))
        .layer(middleware::from_fn(require_auth));

    // 3. HTTP router:
    let app = Router::new()
        .route("/", get(|| async { "API is running" }))
        .route("/api/auth/register", post(handle_register))
        .route("/api/auth/login", post(handle_login))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(Extension(store))
        .layer(Extension(keys));

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
