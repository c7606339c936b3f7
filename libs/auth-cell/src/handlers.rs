use std::sync::Arc;

use axum::extract::{Json, State};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use serde_json::{json, Value};
use tracing::debug;

use shared_models::auth::{Credentials, SessionResponse, SessionUser};
use shared_models::error::AppError;

use crate::services::AuthService;

pub async fn login(
    State(service): State<Arc<AuthService>>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<SessionResponse>, AppError> {
    debug!("Login attempt for {}", credentials.email);

    let session = service.login(&credentials).await?;
    Ok(Json(session.into()))
}

pub async fn logout(
    State(service): State<Arc<AuthService>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<Value>, AppError> {
    let removed = service.logout(auth.token()).await;
    Ok(Json(json!({ "logged_out": removed })))
}

pub async fn current_session(
    State(service): State<Arc<AuthService>>,
    TypedHeader(auth): TypedHeader<Authorization<Bearer>>,
) -> Result<Json<SessionUser>, AppError> {
    let session = service
        .current(auth.token())
        .await
        .ok_or_else(|| AppError::Auth("Session not found or expired".to_string()))?;

    debug!("Session lookup for user: {}", session.user.id);
    Ok(Json(session.user))
}
