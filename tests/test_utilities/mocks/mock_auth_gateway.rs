use async_trait::async_trait;
use recipe_finder::ports::outbound::{AuthReply, Credentials, Registration};
use recipe_finder::prelude::*;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock AuthGateway for testing that replies with a fixed body
#[derive(Clone)]
pub struct MockAuthGateway {
    pub status: String,
    pub data: Option<Value>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockAuthGateway {
    pub fn ok(data: Value) -> Self {
        Self {
            status: "ok".to_string(),
            data: Some(data),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn error(data: Value) -> Self {
        Self {
            status: "error".to_string(),
            data: Some(data),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn reply(&self) -> AuthReply {
        serde_json::from_value(serde_json::json!({
            "status": self.status,
            "data": self.data,
        }))
        .unwrap()
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn register(&self, registration: &Registration) -> Result<AuthReply> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("register:{}", registration.email));
        Ok(self.reply())
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthReply> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("login:{}", credentials.email));
        Ok(self.reply())
    }
}
