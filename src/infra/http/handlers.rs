use axum::{
    Json,
    extract::{Path, Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::application::error::FixtureError;
use crate::application::models::{AttachmentPage, ContentPage, LabelPage, SpacesPage};

use super::FixtureState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SpacesQuery {
    limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    cql: String,
}

pub async fn spaces(
    State(state): State<FixtureState>,
    Query(query): Query<SpacesQuery>,
) -> Json<SpacesPage> {
    Json(state.catalog.spaces_page(query.limit))
}

pub async fn labels(
    State(state): State<FixtureState>,
    Path(label_id): Path<String>,
) -> Json<LabelPage> {
    Json(state.catalog.label_page(&label_id))
}

pub async fn search(
    State(state): State<FixtureState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ContentPage>, FixtureError> {
    Ok(Json(state.catalog.search_page(&query.cql)?))
}

pub async fn attachments(
    State(state): State<FixtureState>,
    Path(content_id): Path<String>,
) -> Json<AttachmentPage> {
    Json(state.catalog.attachments_page(&content_id))
}

pub async fn download(
    State(state): State<FixtureState>,
    Path((_content_id, attachment_id)): Path<(String, String)>,
) -> Result<Response, FixtureError> {
    let body = state.catalog.attachment_body(&attachment_id)?;
    Ok(([(CONTENT_TYPE, "application/octet-stream")], body).into_response())
}
