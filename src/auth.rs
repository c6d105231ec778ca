use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use crate::error::AppError;

/// Hash a raw session token for storage/lookup.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generate a new random session token.
pub fn generate_token() -> String {
    use rand::Rng;
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}

/// In-memory set of active sessions, keyed by token hash.
///
/// Identity lives with an external provider; this side only ever needs
/// to answer "is a session active" for a presented token.
#[derive(Clone, Default)]
pub struct SessionStore {
    tokens: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session and return the raw token. The raw value is handed
    /// out exactly once; only its hash is retained.
    pub async fn sign_in(&self) -> String {
        let token = generate_token();
        self.tokens.write().await.insert(hash_token(&token));
        token
    }

    /// Close a session. Returns false when the token was not active.
    pub async fn sign_out(&self, token: &str) -> bool {
        self.tokens.write().await.remove(&hash_token(token))
    }

    pub async fn is_active(&self, token: &str) -> bool {
        self.tokens.read().await.contains(&hash_token(token))
    }
}

/// Middleware that validates the Bearer token against the session store.
pub async fn require_session(
    State(sessions): State<SessionStore>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    if !sessions.is_active(token).await {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
