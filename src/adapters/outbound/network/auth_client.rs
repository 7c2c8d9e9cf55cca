use super::http_settings::HttpSettings;
use crate::ports::outbound::{AuthGateway, AuthReply, Credentials, Registration};
use crate::shared::error::RecipeError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

/// Local account backend used during development
pub const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:5001";

/// HttpAuthGateway adapter for the account backend
///
/// Sends one JSON POST per call. Requests are not retried: registering
/// twice is not harmless.
pub struct HttpAuthGateway {
    client: reqwest::Client,
    settings: HttpSettings,
}

impl HttpAuthGateway {
    pub fn new(settings: HttpSettings) -> Result<Self> {
        let client = settings.build_client()?;
        Ok(Self { client, settings })
    }

    async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<AuthReply> {
        let url = format!("{}/{}", self.settings.trimmed_base_url(), endpoint);
        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: Option<Value> = response.json().await.ok();
            let message = body
                .as_ref()
                .and_then(|b| b.get("message"))
                .and_then(Value::as_str)
                .map(String::from);
            return match message {
                Some(message) => Err(RecipeError::Authentication { message }.into()),
                None => Err(anyhow::anyhow!(
                    "Auth backend returned status code {} for {}",
                    status,
                    endpoint
                )),
            };
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn register(&self, registration: &Registration) -> Result<AuthReply> {
        self.post("register", registration).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthReply> {
        self.post("login", credentials).await
    }
}
