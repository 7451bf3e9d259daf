//! # Authentication Module
//!
//! JWT-based authentication and authorization.
//!
//! [`token`] issues and verifies HS256 access tokens against the
//! shared secret from configuration. [`middleware`] provides the
//! composable request guards: [`Authentication`] verifies the bearer
//! token and attaches the caller's identity, [`RequireRole`] gates a
//! scope on that identity's role, and [`OptionalAuthentication`]
//! attaches the identity when present without failing the request.

pub mod middleware;
pub mod token;

pub use middleware::{AuthenticatedUser, Authentication, OptionalAuthentication, RequireRole};
pub use token::TokenService;
