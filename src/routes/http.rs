//! HTTP endpoint handlers. Thin wrappers that forward to the query layer.
//! Each handler is instrumented; logs include parameters and basic result info.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{info, instrument, warn};

use crate::domain::CefrLevel;
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
    Json(HealthOut { ok: true })
}

#[instrument(level = "info", skip(state), fields(id = q.id))]
pub async fn http_get_lesson(
    State(state): State<Arc<AppState>>,
    Query(q): Query<LessonQuery>,
) -> Result<Json<LessonOut>, (StatusCode, Json<ErrorOut>)> {
    match state.get_lesson(q.id) {
        Ok(lesson) => {
            info!(target: "lesson", id = lesson.id, level = %lesson.level, "HTTP lesson served");
            Ok(Json(to_out(lesson)))
        }
        Err(e) => {
            warn!(target: "lesson", id = q.id, "HTTP lesson not found");
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorOut {
                    message: e.to_string(),
                }),
            ))
        }
    }
}

#[instrument(level = "info", skip(state), fields(level = %q.level))]
pub async fn http_get_lessons(
    State(state): State<Arc<AppState>>,
    Query(q): Query<LevelQuery>,
) -> Result<Json<Vec<LessonSummaryOut>>, (StatusCode, Json<ErrorOut>)> {
    let Some(level) = CefrLevel::parse(&q.level) else {
        warn!(target: "lesson", tag = %q.level, "HTTP level listing rejected: unknown tag");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorOut {
                message: format!("unknown level tag '{}'", q.level),
            }),
        ));
    };

    let lessons = state.lessons_by_level(level);
    info!(target: "lesson", %level, count = lessons.len(), "HTTP level listing served");
    Ok(Json(lessons.into_iter().map(to_summary).collect()))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_levels(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(LevelsOut {
        levels: state.levels().to_vec(),
    })
}
