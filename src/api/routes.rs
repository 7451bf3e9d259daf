//! # API Route Configuration
//!
//! This module sets up all the HTTP routes for the API.

use actix_web::web;

use super::handlers;
use crate::auth::Authentication;

/// Configure all API routes.
///
/// Called from main.rs to set up the endpoint tree.
///
/// ## Route Structure
///
/// ```text
/// /
/// ├── /health                  GET - Health check
/// └── /api/v1
///     ├── /                    GET - Endpoint index
///     ├── /auth
///     │   ├── /                GET - Planned endpoints
///     │   └── /me              GET - Current user (authenticated)
///     ├── /groups              GET - Planned endpoints
///     ├── /savings             GET - Planned endpoints
///     ├── /loans               GET - Planned endpoints
///     ├── /repayments          GET - Planned endpoints
///     ├── /gamification        GET - Planned endpoints
///     └── /ussd                GET - Planned endpoints
/// ```
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Root endpoint - API banner
        .route("/", web::get().to(handlers::api_info))
        // Health check endpoint
        .route("/health", web::get().to(handlers::health_check))
        // Versioned API
        .service(
            web::scope("/api/v1")
                .route("", web::get().to(handlers::v1_index))
                .service(
                    web::scope("/auth")
                        .route("", web::get().to(handlers::auth_index))
                        .service(
                            web::resource("/me")
                                .wrap(Authentication)
                                .route(web::get().to(handlers::me)),
                        ),
                )
                .service(
                    web::scope("/groups").route("", web::get().to(handlers::groups_index)),
                )
                .service(
                    web::scope("/savings").route("", web::get().to(handlers::savings_index)),
                )
                .service(web::scope("/loans").route("", web::get().to(handlers::loans_index)))
                .service(
                    web::scope("/repayments")
                        .route("", web::get().to(handlers::repayments_index)),
                )
                .service(
                    web::scope("/gamification")
                        .route("", web::get().to(handlers::gamification_index)),
                )
                .service(web::scope("/ussd").route("", web::get().to(handlers::ussd_index))),
        );
}
