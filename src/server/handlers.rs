use super::types::{
    ErrorResponse, OcrResponse, SessionClosed, SessionQuery, TableQuestion, TableResponse,
    TableUploadQuery, TurnRequest, TurnResponse,
};
use crate::{
    Error, assistant::Assistant, chat::transcript, ocr::RecognitionBody, session::SessionStore,
    tabular::DISPLAY_ROWS,
};
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
    pub sessions: Arc<SessionStore>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(e: Error) -> ApiError {
    let status = match &e {
        Error::SessionNotFound { .. } => StatusCode::NOT_FOUND,
        e if e.is_input_error() => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Request failed: {}", e);
    } else {
        warn!("Rejected request: {}", e);
    }

    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

fn require_text(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(error_response(Error::input(format!(
            "{field} must not be empty"
        ))));
    }
    Ok(())
}

fn require_body(body: &Bytes) -> Result<(), ApiError> {
    if body.is_empty() {
        return Err(error_response(Error::input("request body is empty")));
    }
    Ok(())
}

fn text_attachment(filename: &'static str, text: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        text,
    )
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<TurnRequest>,
) -> Result<Json<TurnResponse>, ApiError> {
    require_text("input", &request.input)?;
    let (session_id, session) = state
        .sessions
        .get_or_create(request.session_id)
        .map_err(error_response)?;

    let mut session = session.lock().await;
    let output = state.assistant.chat(&mut session, &request.input).await;

    info!("Chat turn completed for session: {}", session_id);
    Ok(Json(TurnResponse { session_id, output }))
}

pub async fn upload_image(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    body: Bytes,
) -> Result<Json<TurnResponse>, ApiError> {
    require_body(&body)?;
    let (session_id, session) = state
        .sessions
        .get_or_create(query.session_id)
        .map_err(error_response)?;

    let mut session = session.lock().await;
    let output = state
        .assistant
        .upload_image(&mut session, &body)
        .map_err(error_response)?;

    Ok(Json(TurnResponse { session_id, output }))
}

pub async fn image_chat(
    State(state): State<AppState>,
    Json(request): Json<TurnRequest>,
) -> Result<Json<TurnResponse>, ApiError> {
    require_text("input", &request.input)?;
    let (session_id, session) = state
        .sessions
        .get_or_create(request.session_id)
        .map_err(error_response)?;

    let mut session = session.lock().await;
    let output = state
        .assistant
        .image_chat(&mut session, &request.input)
        .await;

    Ok(Json(TurnResponse { session_id, output }))
}

pub async fn ocr(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    body: Bytes,
) -> Result<Json<OcrResponse>, ApiError> {
    require_body(&body)?;
    let (session_id, session) = state
        .sessions
        .get_or_create(query.session_id)
        .map_err(error_response)?;

    let mut session = session.lock().await;
    let recognition = state
        .assistant
        .ocr_only(&mut session, &body)
        .await
        .map_err(error_response)?;

    Ok(Json(OcrResponse {
        session_id,
        recognition: RecognitionBody::from(&recognition),
    }))
}

pub async fn upload_table(
    State(state): State<AppState>,
    Query(query): Query<TableUploadQuery>,
    body: Bytes,
) -> Result<Json<TableResponse>, ApiError> {
    require_body(&body)?;
    let (session_id, session) = state
        .sessions
        .get_or_create(query.session_id)
        .map_err(error_response)?;

    let mut session = session.lock().await;
    let table = state
        .assistant
        .upload_table(&mut session, &query.filename, &body)
        .map_err(error_response)?;

    Ok(Json(TableResponse {
        session_id,
        headers: table.headers.clone(),
        rows: table.head(DISPLAY_ROWS).to_vec(),
        total_rows: table.rows.len(),
    }))
}

pub async fn ask_table(
    State(state): State<AppState>,
    Json(request): Json<TableQuestion>,
) -> Result<Json<TurnResponse>, ApiError> {
    require_text("question", &request.question)?;
    let session = state
        .sessions
        .get(&request.session_id)
        .map_err(error_response)?;

    let session = session.lock().await;
    let output = state
        .assistant
        .ask_table(&session, &request.question)
        .await
        .map_err(error_response)?;

    Ok(Json(TurnResponse {
        session_id: request.session_id,
        output,
    }))
}

pub async fn download_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.sessions.get(&session_id).map_err(error_response)?;
    let text = transcript::render(&session.lock().await.chat);
    Ok(text_attachment("chat.txt", text))
}

pub async fn download_ocr(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.sessions.get(&session_id).map_err(error_response)?;
    let text = session
        .lock()
        .await
        .last_ocr
        .clone()
        .ok_or_else(|| error_response(Error::input("no OCR output for this session yet")))?;
    Ok(text_attachment("extracted.txt", text))
}

pub async fn close_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionClosed>, ApiError> {
    let session = state.sessions.remove(&session_id).map_err(error_response)?;
    let session = session.lock().await;

    Ok(Json(SessionClosed {
        session_id,
        created_at: session.created_at,
        chat_messages: session.chat.len(),
    }))
}

pub async fn health() -> &'static str {
    "ok"
}
