use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;

use crate::auth::SessionStore;
use crate::error::AppError;

/// Open a session. Stands in for the external identity provider: the
/// raw token is returned exactly once and only its hash is retained.
pub async fn sign_in(State(sessions): State<SessionStore>) -> Json<serde_json::Value> {
    let token = sessions.sign_in().await;
    Json(serde_json::json!({ "token": token }))
}

/// Close the presented session. Idempotent: an unknown token reports
/// `signedOut: false` rather than an error.
pub async fn sign_out(
    State(sessions): State<SessionStore>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::Unauthorized)?;
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::Unauthorized)?;

    let signed_out = sessions.sign_out(token).await;
    Ok(Json(serde_json::json!({ "signedOut": signed_out })))
}
