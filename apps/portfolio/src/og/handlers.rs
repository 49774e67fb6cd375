use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use tracing::error;

use crate::og::{render_png, OgError, OgParams, OgQuery};
use crate::state::AppState;

const FAILURE_BODY: &str = "Failed to generate the image";

/// GET /api/og?title=&tags=&category=
///
/// Any rendering failure yields a plain-text 500 and no partial image.
pub async fn handle_og_image(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    // A malformed query string renders the default card.
    let pairs = pairs.map(|Query(pairs)| pairs).unwrap_or_default();
    let params = OgParams::from_query(OgQuery::from_pairs(pairs));
    let footer = format!("{} Portfolio", state.config.site_owner);

    let rendered = tokio::task::spawn_blocking(move || render_png(&params, &footer))
        .await
        .map_err(OgError::from)
        .and_then(|result| result);

    match rendered {
        Ok(png) => ([(header::CONTENT_TYPE, "image/png")], Bytes::from(png)).into_response(),
        Err(e) => {
            error!("OG image generation failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                FAILURE_BODY,
            )
                .into_response()
        }
    }
}
