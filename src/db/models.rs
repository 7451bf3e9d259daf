//! # Database Models
//!
//! Typed views over the externally managed schema. Only the slice the
//! running service actually reads is modelled here: the user identity
//! columns the authentication middleware loads on every request.
//!
//! Roles and statuses are stored as TEXT in their SCREAMING_SNAKE
//! form; the enums below round-trip that representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A user's role, controlling which endpoints they may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Regular group member
    Member,
    /// Elected administrator of a savings group
    GroupAdmin,
    /// Platform administrator
    Admin,
}

impl UserRole {
    /// The TEXT column representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Member => "MEMBER",
            UserRole::GroupAdmin => "GROUP_ADMIN",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MEMBER" => Ok(UserRole::Member),
            "GROUP_ADMIN" => Ok(UserRole::GroupAdmin),
            "ADMIN" => Ok(UserRole::Admin),
            other => Err(format!("unknown user role '{other}'")),
        }
    }
}

/// Account lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Registered but KYC not yet verified
    PendingVerification,
    /// Fully active account
    Active,
    /// Suspended by an administrator; all access denied
    Suspended,
    /// Permanently closed
    Closed,
}

impl UserStatus {
    /// The TEXT column representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::PendingVerification => "PENDING_VERIFICATION",
            UserStatus::Active => "ACTIVE",
            UserStatus::Suspended => "SUSPENDED",
            UserStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING_VERIFICATION" => Ok(UserStatus::PendingVerification),
            "ACTIVE" => Ok(UserStatus::Active),
            "SUSPENDED" => Ok(UserStatus::Suspended),
            "CLOSED" => Ok(UserStatus::Closed),
            other => Err(format!("unknown user status '{other}'")),
        }
    }
}

/// The identity columns of a user row.
///
/// This is the projection the authentication middleware loads; the
/// full user table (PIN hash, KYC documents, savings references) stays
/// out of scope until the corresponding features land.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Primary key.
    pub id: Uuid,

    /// Registered mobile number in E.164 form.
    pub phone_number: String,

    /// Authorization role.
    pub role: UserRole,

    /// Account lifecycle status.
    pub status: UserStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Member, UserRole::GroupAdmin, UserRole::Admin] {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            UserStatus::PendingVerification,
            UserStatus::Active,
            UserStatus::Suspended,
            UserStatus::Closed,
        ] {
            assert_eq!(status.as_str().parse::<UserStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!("SUPERUSER".parse::<UserRole>().is_err());
        assert!("FROZEN".parse::<UserStatus>().is_err());
    }
}
