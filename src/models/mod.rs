//! # API Models
//!
//! Structures for outgoing API response bodies. Request bodies will be
//! added here as the domain endpoints are implemented.
//!
//! All responses use the standard envelope:
//!
//! ```json
//! // Success response
//! {
//!     "success": true,
//!     "data": { ... },
//!     "error": null
//! }
//!
//! // Error response
//! {
//!     "success": false,
//!     "data": null,
//!     "error": {
//!         "code": "ERROR_CODE",
//!         "message": "Human readable message"
//!     }
//! }
//! ```

pub mod responses;

pub use responses::*;
