use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Register,
    Login,
}

impl std::fmt::Display for AuthAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthAction::Register => write!(f, "register"),
            AuthAction::Login => write!(f, "login"),
        }
    }
}

/// AuthOutcome - a successful register or login
#[derive(Debug, Clone, PartialEq)]
pub struct AuthOutcome {
    pub action: AuthAction,
    pub email: String,
    pub message: String,
    /// Whatever the backend returned in `data` (e.g. a token), passed through
    pub data: Option<Value>,
}
