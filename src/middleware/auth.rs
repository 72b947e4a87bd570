use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::auth;
use crate::error::ApiError;

/// Authentication middleware for the protected `/api` surface.
///
/// Resolves the caller identity from the bearer credential and injects
/// it as a request extension. Requests with no credential at all are
/// rejected here too: the identity collaborator treats "no credential"
/// as "no identity", and this layer is where protected routes decide
/// that no identity is not enough.
pub async fn require_identity(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = auth::authenticate(&headers)?
        .ok_or_else(|| ApiError::unauthorized("Authentication credentials were not provided"))?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}
