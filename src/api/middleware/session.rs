//! Database session middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::errors::AppError;

/// Open a database session for the request and close it afterwards.
///
/// The session is inserted into the request extensions, where handlers pick
/// it up with `Extension<DbSession>`. It is closed on every path out of the
/// handler, including extractor rejections: 2xx responses commit, anything
/// else rolls back.
pub async fn db_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session = state.database.begin_session().await?;
    request.extensions_mut().insert(session.clone());

    let response = next.run(request).await;

    session.close(response.status().is_success()).await?;

    Ok(response)
}
