use super::{board_not_found, ApiError, ApiResult, AppState};
use crate::boards::{
    BoardDetails, BoardService, BoardSummary, BoardView, CommentView, CreateBoardInput,
    CreateCommentInput,
};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
    version: &'static str,
    api_port: u16,
}

pub(crate) async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        api_port: state.config.api_port,
    })
}

pub(crate) async fn create_board(
    State(state): State<AppState>,
    payload: Option<Json<CreateBoardInput>>,
) -> Result<(StatusCode, Json<BoardView>), ApiError> {
    // A missing or unreadable body is fine; every field has a default.
    let input = payload.map(|Json(input)| input).unwrap_or_default();
    let service = BoardService::new(state.database.clone());
    let board = service.create_board(input)?;
    tracing::info!(board_id = %board.id, join_code = %board.join_code, "board created");
    Ok((StatusCode::CREATED, Json(board)))
}

pub(crate) async fn get_board_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<BoardSummary> {
    let service = BoardService::new(state.database.clone());
    match service.get_board_by_join_code(&code)? {
        Some(summary) => Ok(Json(summary)),
        None => Err(board_not_found()),
    }
}

pub(crate) async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<BoardView> {
    let service = BoardService::new(state.database.clone());
    match service.get_board(&id)? {
        Some(board) => Ok(Json(board)),
        None => Err(board_not_found()),
    }
}

pub(crate) async fn view_board(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> ApiResult<BoardDetails> {
    let service = BoardService::new(state.database.clone());
    match service.view_board(&token)? {
        Some(details) => Ok(Json(details)),
        None => Err(board_not_found()),
    }
}

pub(crate) async fn create_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<CreateCommentInput>>,
) -> Result<(StatusCode, Json<CommentView>), ApiError> {
    let input = payload.map(|Json(input)| input).unwrap_or_default();
    let service = BoardService::new(state.database.clone());
    match service.add_comment(&id, input)? {
        Some(comment) => Ok((StatusCode::CREATED, Json(comment))),
        None => Err(board_not_found()),
    }
}

pub(crate) async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<CommentView>> {
    let service = BoardService::new(state.database.clone());
    match service.list_comments(&id)? {
        Some(comments) => Ok(Json(comments)),
        None => Err(board_not_found()),
    }
}
