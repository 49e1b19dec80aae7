//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! answered from the query layer. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use crate::domain::CefrLevel;
use crate::protocol::{to_out, to_summary, ClientWsMessage, ServerWsMessage};
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "tienganh_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "tienganh_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, dispatch, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target = "tienganh_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state)
          }
          Err(e) => {
            error!(target: "tienganh_backend", payload = %trunc_for_log(&txt, 120), error = %e, "WS invalid JSON");
            ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) }
          }
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "tienganh_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "tienganh_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => ServerWsMessage::Pong,

    ClientWsMessage::GetLesson { lesson_id } => match state.get_lesson(lesson_id) {
      Ok(lesson) => {
        tracing::info!(target: "lesson", id = lesson.id, level = %lesson.level, "WS lesson served");
        ServerWsMessage::Lesson { lesson: to_out(lesson) }
      }
      Err(e) => {
        tracing::info!(target: "lesson", id = lesson_id, "WS lesson not found");
        ServerWsMessage::Error { message: e.to_string() }
      }
    },

    ClientWsMessage::LessonsForLevel { level } => match CefrLevel::parse(&level) {
      Some(level) => {
        let lessons = state.lessons_by_level(level);
        tracing::info!(target: "lesson", %level, count = lessons.len(), "WS level listing served");
        ServerWsMessage::LessonList {
          level,
          lessons: lessons.into_iter().map(to_summary).collect(),
        }
      }
      None => ServerWsMessage::Error { message: format!("unknown level tag '{}'", level) },
    },

    ClientWsMessage::Levels => ServerWsMessage::Levels { levels: state.levels().to_vec() },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn state() -> AppState {
    AppState::new().expect("state")
  }

  #[test]
  fn get_lesson_answers_with_the_full_lesson() {
    let reply = handle_client_ws(ClientWsMessage::GetLesson { lesson_id: 1 }, &state());
    match reply {
      ServerWsMessage::Lesson { lesson } => {
        assert_eq!(lesson.id, 1);
        assert_eq!(lesson.vocabulary.len(), 20);
        assert!(!lesson.checkpoint);
      }
      other => panic!("expected lesson reply, got {other:?}"),
    }
  }

  #[test]
  fn missing_lesson_answers_with_an_error_message() {
    let reply = handle_client_ws(ClientWsMessage::GetLesson { lesson_id: 9999 }, &state());
    assert!(matches!(reply, ServerWsMessage::Error { .. }));
  }

  #[test]
  fn level_listing_accepts_lowercase_tags() {
    let reply = handle_client_ws(
      ClientWsMessage::LessonsForLevel { level: "b1".into() },
      &state(),
    );
    match reply {
      ServerWsMessage::LessonList { level, lessons } => {
        assert_eq!(level, CefrLevel::B1);
        let ids: Vec<u32> = lessons.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![16, 17, 18, 19, 20, 21, 22]);
      }
      other => panic!("expected lesson list, got {other:?}"),
    }
  }

  #[test]
  fn levels_reply_lists_all_six_in_order() {
    let reply = handle_client_ws(ClientWsMessage::Levels, &state());
    match reply {
      ServerWsMessage::Levels { levels } => assert_eq!(levels, CefrLevel::ALL.to_vec()),
      other => panic!("expected levels reply, got {other:?}"),
    }
  }
}
