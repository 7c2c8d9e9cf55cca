use crate::application::dto::{AuthAction, AuthOutcome};
use crate::ports::outbound::{AuthGateway, AuthReply, Credentials, Registration};
use crate::shared::error::RecipeError;
use crate::shared::Result;
use serde_json::Value;

const MISSING_FIELDS: &str = "Please fill in all fields.";
const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// AuthenticateUseCase - account registration and sign-in
///
/// Inputs are checked before any request is sent. The backend decides
/// success through `status == "ok"`; anything else becomes
/// `RecipeError::Authentication` carrying the backend's `data`.
pub struct AuthenticateUseCase<G> {
    gateway: G,
}

impl<G: AuthGateway> AuthenticateUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthOutcome> {
        let registration = Registration {
            name: required(name)?,
            email: required(email)?,
            password: secret(password)?,
        };

        tracing::debug!(email = %registration.email, "registering account");
        let reply = self.gateway.register(&registration).await?;
        Self::outcome(
            AuthAction::Register,
            registration.email,
            reply,
            "Account created successfully",
        )
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        let credentials = Credentials {
            email: required(email)?,
            password: secret(password)?,
        };

        tracing::debug!(email = %credentials.email, "signing in");
        let reply = self.gateway.login(&credentials).await?;
        Self::outcome(
            AuthAction::Login,
            credentials.email,
            reply,
            "Logged in successfully",
        )
    }

    fn outcome(
        action: AuthAction,
        email: String,
        reply: AuthReply,
        success: &str,
    ) -> Result<AuthOutcome> {
        if !reply.is_ok() {
            return Err(RecipeError::Authentication {
                message: failure_message(reply.data.as_ref()),
            }
            .into());
        }

        Ok(AuthOutcome {
            action,
            email,
            message: success.to_string(),
            data: reply.data,
        })
    }
}

fn required(field: &str) -> Result<String> {
    let value = field.trim();
    if value.is_empty() {
        return Err(RecipeError::Validation {
            message: MISSING_FIELDS.to_string(),
        }
        .into());
    }
    Ok(value.to_string())
}

/// Passwords are checked for blankness but sent as typed
fn secret(field: &str) -> Result<String> {
    required(field)?;
    Ok(field.to_string())
}

fn failure_message(data: Option<&Value>) -> String {
    match data {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Null) | None => UNKNOWN_ERROR.to_string(),
        Some(Value::String(_)) => UNKNOWN_ERROR.to_string(),
        Some(other) => other.to_string(),
    }
}
