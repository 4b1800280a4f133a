use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;

use crate::middleware::AuthUser;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GetTechQuery {
    pub tree: Option<String>,
}

/// GET /users/:discordid/tech - technologies the caller has unlocked.
///
/// The lookup key is the verified session's discordtag. The path id and the
/// `tree` filter are validated but do not narrow the query; clients send
/// them and get the whole document back.
pub async fn tech_get(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(discordid): Path<String>,
    Query(query): Query<GetTechQuery>,
) -> Response {
    let tree_requested = query.tree.as_deref().is_some_and(|tree| !tree.is_empty());
    if discordid.is_empty() || !tree_requested {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state.tech.find_by_discordtag(&user.discordtag).await {
        Ok(Some(document)) => (StatusCode::OK, Json(document)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("tech tree lookup failed: {}", e);
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}
