use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Login credentials
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account registration payload
#[derive(Clone, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Reply body of the auth backend: `{"status": "ok", "data": ...}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthReply {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl AuthReply {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// AuthGateway port for the account backend (register + login)
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Creates an account
    ///
    /// # Errors
    /// Returns an error if the request fails or the backend answers with a
    /// non-success HTTP status
    async fn register(&self, registration: &Registration) -> Result<AuthReply>;

    /// Signs in with existing credentials
    async fn login(&self, credentials: &Credentials) -> Result<AuthReply>;
}
