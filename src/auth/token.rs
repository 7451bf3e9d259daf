//! # Access Tokens
//!
//! HS256 JWT issue/verify against the shared secret from
//! configuration. Claims carry the user id and phone number; expiry is
//! validated on decode. Expired tokens are distinguished from
//! otherwise-invalid ones so the error layer can report them
//! separately.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::AuthConfig;

/// Token verification errors.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The token's `exp` claim is in the past
    #[error("Token expired")]
    Expired,

    /// Bad signature, malformed token, or unacceptable claims
    #[error("Invalid token: {0}")]
    Invalid(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(err.to_string()),
        }
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// The authenticated user's id.
    pub user_id: Uuid,

    /// The user's registered phone number.
    pub phone_number: String,

    /// Issued-at, seconds since the epoch.
    pub iat: i64,

    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Issues and verifies access tokens.
///
/// Built once from [`AuthConfig`] at startup and shared through the
/// application state.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expires_in: Duration,
}

impl TokenService {
    /// Build a token service from the configured secret and lifetime.
    pub fn new(auth: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(auth.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(auth.jwt_secret.as_bytes()),
            expires_in: auth.jwt_expires_in,
        }
    }

    /// Issue a signed access token for a user.
    ///
    /// The login endpoint that will call this is still scaffolding.
    #[allow(dead_code)]
    pub fn issue(&self, user_id: Uuid, phone_number: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            phone_number: phone_number.to_string(),
            iat: now.timestamp(),
            exp: (now + self.expires_in).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::from)
    }

    /// Verify a token's signature and expiry, returning its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str, expires_in: Duration) -> TokenService {
        TokenService::new(&AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_expires_in: expires_in,
            refresh_token_secret: "refresh".to_string(),
            refresh_token_expires_in: Duration::days(30),
            bcrypt_rounds: 10,
        })
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let tokens = service("test-secret", Duration::hours(1));
        let user_id = Uuid::new_v4();

        let token = tokens.issue(user_id, "+25779000001").unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.phone_number, "+25779000001");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_is_distinguished() {
        // Issue a token already expired beyond the decoder's leeway
        let tokens = service("test-secret", Duration::seconds(-300));
        let token = tokens.issue(Uuid::new_v4(), "+25779000002").unwrap();

        match tokens.verify(&token) {
            Err(TokenError::Expired) => {}
            other => panic!("expected Expired, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = service("secret-a", Duration::hours(1));
        let verifier = service("secret-b", Duration::hours(1));

        let token = issuer.issue(Uuid::new_v4(), "+25779000003").unwrap();
        match verifier.verify(&token) {
            Err(TokenError::Invalid(_)) => {}
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_garbage_rejected() {
        let tokens = service("test-secret", Duration::hours(1));
        assert!(matches!(
            tokens.verify("not.a.token"),
            Err(TokenError::Invalid(_))
        ));
    }
}
