//! # KIRIMBA Banking API
//!
//! Entry point for the mobile-money / micro-lending banking API:
//! group savings, loan origination, repayment and gamification for
//! savings groups, reachable over REST and (eventually) USSD.
//!
//! The domain endpoints are scaffolding for now; what runs today is
//! the configuration layer, the JWT authentication middleware, the
//! centralized error translator, the database liveness probe, and the
//! server lifecycle around them.
//!
//! ## Architecture Overview
//!
//! ```text
//! request
//!    │
//!    ▼
//! CORS ── Authentication (where wrapped) ── handler
//!                 │                            │
//!                 ▼                            ▼
//!           PostgreSQL pool            static listing /
//!           (user lookup)              live response
//! ```
//!
//! ## Quick Start
//!
//! 1. Set up PostgreSQL and create the database
//! 2. Copy `.env.example` to `.env` and configure
//! 3. Start the server: `cargo run`
//!
//! ## Environment Variables
//!
//! See `.env.example` and the `config` module for the full list.

use actix_cors::Cors;
use actix_web::{http, middleware, web, App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod auth;
mod config;
mod db;
mod error;
mod models;

use auth::TokenService;
use config::AppConfig;
use db::Database;

/// Application state shared across all handlers and middleware.
pub struct AppState {
    /// Database connection pool for PostgreSQL
    pub db: Database,

    /// Access token issue/verify service
    pub tokens: TokenService,

    /// Application configuration
    pub config: AppConfig,
}

/// Main entry point for the API server.
///
/// 1. Initializes logging
/// 2. Loads configuration from the environment
/// 3. Connects the database pool
/// 4. Launches the HTTP server
/// 5. Closes the pool once the server shuts down
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Structured logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting KIRIMBA Banking API");

    // Load configuration from environment variables (from .env file).
    // It's okay if .env doesn't exist.
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("Failed to load configuration");

    info!("Configuration loaded");
    info!("   Environment: {}", config.node_env);
    info!("   API version: {}", config.api_version);

    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let tokens = TokenService::new(&config.auth);

    let state = web::Data::new(AppState {
        db: db.clone(),
        tokens,
        config: config.clone(),
    });

    let host = config.host.clone();
    let port = config.port;
    let cors_origins = config.cors_origin.clone();

    info!("Starting HTTP server on {}:{}", host, port);
    info!("   Health check: http://{}:{}/health", host, port);
    info!(
        "   API base URL: http://{}:{}/api/{}",
        host, port, config.api_version
    );

    HttpServer::new(move || {
        // CORS is rebuilt per worker from the configured origins.
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
            .max_age(3600);
        if cors_origins.iter().any(|origin| origin == "*") {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.supports_credentials();
            for origin in &cors_origins {
                cors = cors.allowed_origin(origin);
            }
        }

        App::new()
            // Attach shared application state
            .app_data(state.clone())
            // Malformed JSON bodies go through the standard error envelope
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                error::AppError::Validation(err.to_string()).into()
            }))
            // Add logging middleware
            .wrap(middleware::Logger::default())
            .wrap(cors)
            // Configure API routes
            .configure(api::configure_routes)
            // Unknown routes get the JSON 404 envelope
            .default_service(web::route().to(api::handlers::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    // actix stops accepting and drains workers on SIGTERM/SIGINT;
    // once run() returns the pool can be released.
    info!("Shutting down gracefully...");
    db.close();

    Ok(())
}
