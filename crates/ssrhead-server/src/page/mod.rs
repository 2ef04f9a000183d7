//! Server-rendered page endpoints.
//!
//! - `GET /`, `GET /*path` : HTML document shell with the route's head
//! - `GET /api/head`       : tag descriptors for `?path=` as JSON

pub mod document;

use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
    Json,
};
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use ssrhead_core::error::HeadError;
use ssrhead_core::{render_head, HeadTag};

use crate::{app_state::AppState, error::ApiError};

pub async fn document(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, ApiError> {
    // Route paths are configured decoded, the same form `?path=` arrives in.
    let path = percent_decode_str(uri.path())
        .decode_utf8()
        .map_err(|e| HeadError::BadRequest(format!("request path is not valid utf-8: {e}")))?;
    let meta = state.metadata_for(&path);
    tracing::debug!(%path, title = %meta.long_title, "render document");
    Ok(Html(document::render_document(state.server(), meta)))
}

#[derive(Debug, Default, Deserialize)]
pub struct HeadQuery {
    #[serde(default)]
    pub path: Option<String>,
}

pub async fn head_json(
    State(state): State<AppState>,
    Query(q): Query<HeadQuery>,
) -> Result<Json<Vec<HeadTag>>, ApiError> {
    let path = q.path.as_deref().unwrap_or("/");
    if !path.starts_with('/') {
        return Err(HeadError::BadRequest(format!("path must start with '/': {path}")).into());
    }
    Ok(Json(render_head(state.metadata_for(path))))
}
