use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;

use crate::database::models::MapUpdate;
use crate::middleware::AuthUser;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GetMapQuery {
    pub mappass: Option<String>,
}

/// GET /maps/:mapid - read a shared clan map by id and pass-phrase.
///
/// No session required: the pass-phrase is the access control.
pub async fn map_get(
    State(state): State<AppState>,
    Path(mapid): Path<i32>,
    Query(query): Query<GetMapQuery>,
) -> Response {
    let mappass = match query.mappass {
        Some(ref pass) if !pass.is_empty() && mapid != 0 => pass,
        _ => return StatusCode::BAD_REQUEST.into_response(),
    };

    match state.maps.find_by_id_and_pass(mapid, mappass).await {
        Ok(Some(map)) => (StatusCode::OK, Json(map)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(_) => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct EditMapQuery {
    pub mappass: Option<String>,
    pub mapname: Option<String>,
    pub mapdate: Option<String>,
    pub allowediting: Option<bool>,
}

impl EditMapQuery {
    /// Resolve the edit into the values actually written. The pass-phrase is
    /// required; everything else falls back to its default: "Default Name",
    /// today's UTC date, editing disallowed.
    fn resolve(self) -> Result<MapUpdate, StatusCode> {
        let pass = match self.mappass {
            Some(pass) if !pass.is_empty() => pass,
            _ => return Err(StatusCode::BAD_REQUEST),
        };

        let dateofburning = match self.mapdate {
            Some(raw) => {
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| StatusCode::BAD_REQUEST)?
            }
            None => Utc::now().date_naive(),
        };

        Ok(MapUpdate {
            name: self.mapname.unwrap_or_else(|| "Default Name".to_string()),
            dateofburning,
            allowedit: self.allowediting.unwrap_or(false),
            pass,
        })
    }
}

/// PUT /maps/:mapid - edit a map owned by the authenticated caller.
///
/// The supplied `mappass` becomes the map's new pass-phrase; it is not
/// checked against the stored one. The update predicate is
/// `(mapid, discordid)`, so callers can only touch their own maps, and a
/// zero-row update still answers 202.
pub async fn map_put(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(mapid): Path<i32>,
    Query(query): Query<EditMapQuery>,
) -> Response {
    let update = match query.resolve() {
        Ok(update) => update,
        Err(status) => return status.into_response(),
    };

    match state.maps.update_owned(mapid, &user.discordid, &update).await {
        Ok(_) => (StatusCode::ACCEPTED, Json(json!({ "message": "Map edited" }))).into_response(),
        Err(_) => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}
