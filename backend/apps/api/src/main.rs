//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use axum::{
    Router, http,
    http::{Method, header},
};
use blog::{PgBlogRepository, TokenConfig, blog_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,blog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
        Ok(value) => value
            .trim()
            .parse()
            .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
        Err(_) => DEFAULT_MAX_CONNECTIONS,
    };

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?;

    tracing::info!(max_connections, "Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token configuration
    let token_config = TokenConfig::from_env()?;
    tracing::info!(
        issuer = %token_config.issuer,
        audience = %token_config.audience,
        ttl_secs = token_config.ttl_secs(),
        "Token configuration loaded"
    );

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .merge(blog_router(PgBlogRepository::new(pool), token_config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let addr: SocketAddr = bind_addr
        .parse()
        .with_context(|| format!("BIND_ADDR is not a socket address: {bind_addr}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
