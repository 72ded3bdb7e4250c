//! Models that represent user accounts, roles, and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of a portal account.
pub struct User {
    /// Unique identifier for the user.
    pub id: String,
    /// Login email, unique across the portal.
    pub email: String,
    /// Human-readable full name.
    pub name: String,
    /// Argon2 hash of the user's password.
    pub password_hash: String,
    /// Role describing the user's privileges.
    pub role: UserRole,
    /// Creation timestamp for auditing.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp for auditing.
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::Type, ToSchema, Default)]
#[sqlx(type_name = "TEXT", rename_all = "SCREAMING_SNAKE_CASE")]
/// Supported user roles stored in the database.
pub enum UserRole {
    /// Regular account that submits evidence.
    #[default]
    Submitter,
    /// Reviewer role authorized to approve or reject evidence.
    SystemManager,
}

impl UserRole {
    /// Returns the canonical database representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Submitter => "SUBMITTER",
            UserRole::SystemManager => "SYSTEM_MANAGER",
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            // canonical values
            "SUBMITTER" => Ok(UserRole::Submitter),
            "SYSTEM_MANAGER" => Ok(UserRole::SystemManager),
            // tolerate common legacy casings
            "submitter" | "Submitter" => Ok(UserRole::Submitter),
            "system_manager" | "SystemManager" => Ok(UserRole::SystemManager),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["SUBMITTER", "SYSTEM_MANAGER"],
            )),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
/// Credentials submitted by a user attempting to authenticate.
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
/// Authentication token returned after a successful login.
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
/// Public-facing representation of a user returned by the API.
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role.as_str().to_string(),
        }
    }
}

impl User {
    /// Constructs a new user with freshly generated identifiers.
    pub fn new(email: String, name: String, password_hash: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns `true` when the user holds the reviewer role.
    pub fn is_system_manager(&self) -> bool {
        matches!(self.role, UserRole::SystemManager)
    }
}
