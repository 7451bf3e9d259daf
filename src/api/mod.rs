//! # REST API Module
//!
//! HTTP surface of the KIRIMBA banking API.
//!
//! ## Endpoint Overview
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | API banner |
//! | GET | `/health` | Liveness probe (checks the database) |
//! | GET | `/api/v1` | Endpoint index |
//! | GET | `/api/v1/auth/me` | Current user profile (authenticated) |
//! | GET | `/api/v1/{auth,groups,savings,loans,repayments,gamification,ussd}` | Planned-endpoint listings |
//!
//! The domain route groups are scaffolding: each returns a static
//! description of its planned endpoints until the corresponding
//! business logic lands.

pub mod handlers;
pub mod routes;

pub use routes::configure_routes;
