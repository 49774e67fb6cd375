use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use serde::Serialize;
use tracing::error;

use crate::contact::{ContactDraft, SubmitOutcome, SubmitStatus};
use crate::errors::AppError;
use crate::pages::contact::{render, ContactView};
use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ContactApiResponse {
    /// "success" or "mailto".
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailto: Option<String>,
}

/// GET /contact
pub async fn handle_contact_page(State(state): State<AppState>) -> Html<String> {
    Html(render(&state.config, &ContactView::default()))
}

/// POST /contact
///
/// Re-renders the form with the outcome, or redirects to the visitor's mail
/// client when no endpoint is configured.
pub async fn handle_contact_submit(
    State(state): State<AppState>,
    Form(draft): Form<ContactDraft>,
) -> Response {
    if let Err(notice) = draft.validate() {
        let view = ContactView {
            draft,
            status: SubmitStatus::Idle,
            notice: Some(notice),
        };
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render(&state.config, &view)),
        )
            .into_response();
    }

    let outcome = state.contact.submit(&draft).await;
    let status = outcome.status();
    let view = match outcome {
        SubmitOutcome::MailHandoff(link) => match HeaderValue::try_from(link) {
            Ok(location) => {
                return (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response()
            }
            Err(e) => {
                error!("mailto link is not a valid Location header: {e}");
                ContactView {
                    draft,
                    status: SubmitStatus::Error,
                    notice: None,
                }
            }
        },
        SubmitOutcome::Delivered => ContactView {
            draft: ContactDraft::default(),
            status,
            notice: None,
        },
        SubmitOutcome::Failed => ContactView {
            draft,
            status,
            notice: None,
        },
    };
    Html(render(&state.config, &view)).into_response()
}

/// POST /api/v1/contact
pub async fn handle_contact_api(
    State(state): State<AppState>,
    draft: Result<Json<ContactDraft>, JsonRejection>,
) -> Result<Json<ContactApiResponse>, AppError> {
    let Json(draft) = draft.map_err(|e| AppError::Validation(e.body_text()))?;
    draft.validate().map_err(AppError::Validation)?;

    match state.contact.submit(&draft).await {
        SubmitOutcome::Delivered => Ok(Json(ContactApiResponse {
            status: "success",
            mailto: None,
        })),
        SubmitOutcome::MailHandoff(link) => Ok(Json(ContactApiResponse {
            status: "mailto",
            mailto: Some(link),
        })),
        SubmitOutcome::Failed => Err(AppError::Upstream(
            "contact endpoint did not accept the message".to_string(),
        )),
    }
}
