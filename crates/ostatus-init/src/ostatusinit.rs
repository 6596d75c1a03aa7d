//! Remote subscribe entry point
//!
//! GET renders the subscribe form; POST checks the session token, resolves
//! the visitor's home site and redirects them there.

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Form;
use axum_extra::extract::CookieJar;
use ostatus_resolver::LocalTarget;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::state::AppState;
use crate::views::SubscribeForm;

const BAD_TOKEN: &str = "There was a problem with your session token. Try again, please.";

/// Fields accepted by both the form page and the connect action
#[derive(Debug, Default, Deserialize)]
pub struct InitParams {
    pub nickname: Option<String>,
    pub group: Option<String>,
    pub tagger: Option<String>,
    pub peopletag: Option<String>,
    /// Webfinger account or profile URL of the remote visitor
    pub profile: Option<String>,
    pub ajax: Option<String>,
    pub token: Option<String>,
}

impl InitParams {
    pub fn is_ajax(&self) -> bool {
        let value = self
            .ajax
            .as_deref()
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();
        matches!(value.as_str(), "1" | "true" | "yes" | "on")
    }
}

/// GET /main/ostatusinit
pub async fn show_form(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<InitParams>,
) -> Response {
    let (jar, session_id) = state.session.ensure_session(jar);
    let form = SubscribeForm::new(&params, state.session.token_for(&session_id));
    (jar, form.into_response_with(StatusCode::OK)).into_response()
}

/// POST /main/ostatusinit
pub async fn connect(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(params): Form<InitParams>,
) -> Response {
    if !state.session.verify(&jar, params.token.as_deref()) {
        warn!("Remote subscribe rejected: bad session token");
        let (jar, session_id) = state.session.ensure_session(jar);
        let form = SubscribeForm::new(&params, state.session.token_for(&session_id))
            .with_error(BAD_TOKEN);
        return (jar, form.into_response_with(StatusCode::BAD_REQUEST)).into_response();
    }

    match redirect_for(&state, &params).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    }
}

async fn redirect_for(state: &AppState, params: &InitParams) -> Result<Response, AppError> {
    let target = LocalTarget::from_fields(
        params.nickname.as_deref(),
        params.group.as_deref(),
        params.tagger.as_deref(),
        params.peopletag.as_deref(),
    )?;
    let remote = params.profile.as_deref().unwrap_or("").trim();

    let redirect = state.resolver.resolve(&target, remote).await?;
    info!("Sending remote subscriber {} to {}", remote, redirect.url);

    let status = StatusCode::from_u16(redirect.status).unwrap_or(StatusCode::SEE_OTHER);
    Ok((status, [(header::LOCATION, redirect.url)]).into_response())
}
