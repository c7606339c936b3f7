use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use headers::{authorization::Bearer, Authorization, HeaderMapExt};
use tracing::debug;

use shared_database::SessionStore;
use shared_models::error::AppError;

/// Gate for protected routes: resolves the bearer token to a live session and
/// stores it in the request extensions.
pub async fn session_middleware(
    State(sessions): State<Arc<dyn SessionStore>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)?;

    let session = sessions
        .get(&token)
        .await
        .ok_or_else(|| AppError::Auth("Session not found or expired".to_string()))?;

    debug!("Session resolved for user: {}", session.user.id);
    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

pub fn bearer_token<B>(request: &Request<B>) -> Result<String, AppError> {
    request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .map(|auth| auth.token().to_string())
        .ok_or_else(|| AppError::Auth("Missing or invalid authorization header".to_string()))
}
