use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use guestbook_core::{
    GifFrame, GifRequest, HugRequest, Locale, LocaleInfo, MessageRequest, Notice, PageView,
    SessionInfo, SubmissionResponse,
};
use tracing::info;

use crate::{
    config::AppState,
    services::{parse_session_id, ServiceError},
    types::{ErrorResponse, LocaleQuery, PageQuery},
};

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::InvalidInput(rejection.body_text())
    }
}

fn parse_locale(raw: Option<&str>) -> Result<Locale, ServiceError> {
    match raw {
        None => Ok(Locale::default()),
        Some(code) => code
            .parse()
            .map_err(|e: anyhow::Error| ServiceError::InvalidInput(e.to_string())),
    }
}

pub async fn create_session(State(state): State<AppState>) -> Json<SessionInfo> {
    let id = state.sessions.create();
    info!("Created session {} ({} active)", id, state.sessions.active_count());
    Json(SessionInfo {
        session_id: id.to_string(),
    })
}

pub async fn end_session(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    let id = parse_session_id(&raw_id)?;
    if state.sessions.end(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServiceError::NotFound(format!("session '{}' not found", id)))
    }
}

pub async fn get_locales() -> Json<Vec<LocaleInfo>> {
    Json(Locale::ALL.into_iter().map(LocaleInfo::from).collect())
}

/// Everything the page needs on load. Store problems show up as notices,
/// never as a failed response.
pub async fn get_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageView>, ServiceError> {
    let locale = parse_locale(query.locale.as_deref())?;
    let session_id = match query.session_id.as_deref() {
        Some(raw) => parse_session_id(raw)?,
        None => state.sessions.create(),
    };

    let gif_files = state.media.gif_files();
    let cursor = state.sessions.with_session(session_id, |ctx| ctx.gif);

    let mut notices = Vec::new();
    if let Some(reason) = &state.setup_error {
        notices.push(Notice::setup_failed(locale, reason));
    }
    let (board, refresh_notice) = state.guestbook.refresh(locale).await;
    notices.extend(refresh_notice);

    Ok(Json(PageView {
        session_id: session_id.to_string(),
        locale,
        notices,
        music: state.media.random_music(),
        image: state.media.random_image(),
        gif: state.media.gif_frame(&gif_files, &cursor),
        board,
    }))
}

pub async fn get_guestbook(
    State(state): State<AppState>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<SubmissionResponse>, ServiceError> {
    let locale = parse_locale(query.locale.as_deref())?;
    let (board, notice) = state.guestbook.refresh(locale).await;
    Ok(Json(SubmissionResponse {
        notices: notice.into_iter().collect(),
        board,
    }))
}

pub async fn post_hug(
    State(state): State<AppState>,
    payload: Result<Json<HugRequest>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ServiceError> {
    let Json(request) = payload?;
    let session_id = parse_session_id(&request.session_id)?;
    let response = state
        .guestbook
        .submit_hug(&state.sessions, session_id, &request.name, request.locale)
        .await;
    Ok(Json(response))
}

pub async fn post_message(
    State(state): State<AppState>,
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ServiceError> {
    let Json(request) = payload?;
    // Messages are not deduplicated, the session only has to be well formed.
    parse_session_id(&request.session_id)?;
    let response = state
        .guestbook
        .submit_message(&request.text, request.locale)
        .await;
    Ok(Json(response))
}

pub async fn next_gif(
    State(state): State<AppState>,
    payload: Result<Json<GifRequest>, JsonRejection>,
) -> Result<Json<Option<GifFrame>>, ServiceError> {
    let Json(request) = payload?;
    let session_id = parse_session_id(&request.session_id)?;
    let files = state.media.gif_files();
    let cursor = state.sessions.with_session(session_id, |ctx| {
        ctx.gif.advance(files.len());
        ctx.gif
    });
    let frame = state.media.gif_frame(&files, &cursor);
    if let Some(frame) = &frame {
        info!("Session {} moved to gif {}/{}", session_id, frame.index + 1, frame.total);
    }
    Ok(Json(frame))
}
