//! Subscribe form and error page rendering

use askama::Template;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::ostatusinit::InitParams;

pub const FORM_ACTION: &str = "/main/ostatusinit";

#[derive(Template)]
#[template(path = "subscribe.html")]
pub struct SubscribeForm {
    pub ajax: bool,
    pub action: &'static str,
    pub legend: String,
    pub submit: &'static str,
    pub token: String,
    pub error: String,
    pub is_group: bool,
    pub group: String,
    pub nickname: String,
    pub tagger: String,
    pub peopletag: String,
    pub profile: String,
}

impl SubscribeForm {
    pub fn new(params: &InitParams, token: String) -> Self {
        let field = |f: &Option<String>| f.as_deref().unwrap_or("").trim().to_string();
        let group = field(&params.group);
        let nickname = field(&params.nickname);
        let tagger = field(&params.tagger);
        let peopletag = field(&params.peopletag);

        let (legend, submit) = if !group.is_empty() {
            (format!("Join group {group}"), "Join")
        } else if !peopletag.is_empty() && !tagger.is_empty() {
            (
                format!("Subscribe to list {peopletag} by {tagger}"),
                "Subscribe",
            )
        } else {
            (format!("Subscribe to {nickname}"), "Subscribe")
        };

        Self {
            ajax: params.is_ajax(),
            action: FORM_ACTION,
            legend,
            submit,
            token,
            error: String::new(),
            is_group: !group.is_empty(),
            group,
            nickname,
            tagger,
            peopletag,
            profile: field(&params.profile),
        }
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = error.to_string();
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        let content_type = if self.ajax {
            "text/xml;charset=utf-8"
        } else {
            "text/html;charset=utf-8"
        };

        match self.render() {
            Ok(body) => (status, [(header::CONTENT_TYPE, content_type)], body).into_response(),
            Err(e) => {
                tracing::error!("Template rendering failed: {}", e);
                render_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    message: &'a str,
}

/// Render an error page, falling back to plain text
pub fn render_error(status: StatusCode, message: &str) -> Response {
    match (ErrorPage { message }).render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render error page: {}", e);
            (status, message.to_string()).into_response()
        }
    }
}
