//! Accept-header negotiation and the response shapes shared by every collection.
//!
//! Reads come back as either plain-text lines or a JSON array; the choice is made
//! once per request by the [`Rendering`] extractor. Mutations always answer with a
//! plain-text message whose status follows the receipt outcome.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::ACCEPT;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use collection_framework::render::render_record;
use collection_framework::{Receipt, Selection};
use serde::Serialize;
use std::convert::Infallible;

/// How a read is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    Text,
    Json,
}

impl Rendering {
    /// The first `Accept` entry naming `application/json` or `text/plain` decides;
    /// anything else, including a missing header or `*/*`, means text.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(accept) = headers.get(ACCEPT).and_then(|v| v.to_str().ok()) else {
            return Rendering::Text;
        };
        for media_type in accept.split(',') {
            let essence = media_type.split(';').next().unwrap_or("").trim();
            if essence.eq_ignore_ascii_case("application/json") {
                return Rendering::Json;
            }
            if essence.eq_ignore_ascii_case("text/plain") {
                return Rendering::Text;
            }
        }
        Rendering::Text
    }

    /// Renders a listing: text lines (or `none` for an empty collection), or a JSON array.
    pub fn selection<T, F>(self, selection: Selection<T>, line: F) -> Response
    where
        T: Serialize,
        F: Fn(&T) -> String,
    {
        match self {
            Rendering::Text => selection.render_text(line).into_response(),
            Rendering::Json => Json(selection.into_records()).into_response(),
        }
    }

    /// Renders a single lookup: one text line or `None`, or a JSON array of zero or one record.
    pub fn record<T, F>(self, record: Option<T>, line: F) -> Response
    where
        T: Serialize,
        F: Fn(&T) -> String,
    {
        match self {
            Rendering::Text => render_record(record.as_ref(), line).into_response(),
            Rendering::Json => Json(record.into_iter().collect::<Vec<_>>()).into_response(),
        }
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Rendering {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Rendering::from_headers(&parts.headers))
    }
}

/// Status from the outcome, message as the plain-text body.
pub fn receipt_response(receipt: Receipt) -> Response {
    let status = StatusCode::from_u16(receipt.outcome.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, receipt.message).into_response()
}
