//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{CefrLevel, GrammarRule, Lesson, VocabularyItem};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    GetLesson {
        #[serde(rename = "lessonId")]
        lesson_id: u32,
    },
    LessonsForLevel {
        level: String,
    },
    Levels,
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Lesson {
        lesson: LessonOut,
    },
    LessonList {
        level: CefrLevel,
        lessons: Vec<LessonSummaryOut>,
    },
    Levels {
        levels: Vec<CefrLevel>,
    },
    Error {
        message: String,
    },
}

/// Full lesson DTO used by both WS and HTTP.
#[derive(Debug, Serialize)]
pub struct LessonOut {
    pub id: u32,
    pub level: CefrLevel,
    pub topic: String,
    pub checkpoint: bool,
    pub vocabulary: Vec<VocabularyItem>,
    pub grammar: Vec<GrammarRule>,
}

/// Compact row for level listings (the level-picker screen).
#[derive(Debug, Serialize)]
pub struct LessonSummaryOut {
    pub id: u32,
    pub level: CefrLevel,
    pub topic: String,
    pub checkpoint: bool,
    #[serde(rename = "vocabularyCount")]
    pub vocabulary_count: usize,
    #[serde(rename = "grammarCount")]
    pub grammar_count: usize,
}

/// Convert full `Lesson` (internal) to the public DTO.
pub fn to_out(l: &Lesson) -> LessonOut {
    LessonOut {
        id: l.id,
        level: l.level,
        topic: l.topic.clone(),
        checkpoint: l.is_checkpoint(),
        vocabulary: l.vocabulary.clone(),
        grammar: l.grammar.clone(),
    }
}

/// Compact conversion for listings.
pub fn to_summary(l: &Lesson) -> LessonSummaryOut {
    LessonSummaryOut {
        id: l.id,
        level: l.level,
        topic: l.topic.clone(),
        checkpoint: l.is_checkpoint(),
        vocabulary_count: l.vocabulary.len(),
        grammar_count: l.grammar.len(),
    }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct LessonQuery {
    pub id: u32,
}

#[derive(Debug, Deserialize)]
pub struct LevelQuery {
    pub level: String,
}

#[derive(Serialize)]
pub struct LevelsOut {
    pub levels: Vec<CefrLevel>,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_parse_from_wire_json() {
        let msg: ClientWsMessage =
            serde_json::from_str(r#"{"type":"get_lesson","lessonId":3}"#).expect("get_lesson");
        assert!(matches!(msg, ClientWsMessage::GetLesson { lesson_id: 3 }));

        let msg: ClientWsMessage =
            serde_json::from_str(r#"{"type":"lessons_for_level","level":"B1"}"#).expect("level");
        assert!(matches!(msg, ClientWsMessage::LessonsForLevel { level } if level == "B1"));

        let msg: ClientWsMessage = serde_json::from_str(r#"{"type":"levels"}"#).expect("levels");
        assert!(matches!(msg, ClientWsMessage::Levels));
    }

    #[test]
    fn levels_serialize_as_bare_tags() {
        let out = serde_json::to_string(&LevelsOut {
            levels: CefrLevel::ALL.to_vec(),
        })
        .expect("serialize");
        assert_eq!(out, r#"{"levels":["A1","A2","B1","B2","C1","C2"]}"#);
    }

    #[test]
    fn summary_marks_checkpoints() {
        let chest = Lesson {
            id: 3,
            level: CefrLevel::A1,
            topic: "Rương A1/1".into(),
            vocabulary: vec![],
            grammar: vec![],
        };
        let out = to_summary(&chest);
        assert!(out.checkpoint);
        assert_eq!(out.vocabulary_count, 0);
        assert_eq!(out.grammar_count, 0);
    }
}
