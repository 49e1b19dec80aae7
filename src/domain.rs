//! Domain models used by the backend: CEFR levels, lessons, vocabulary entries,
//! grammar rules, and the catalog error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::normalize_tag;

/// CEFR proficiency tier a lesson is tagged with.
/// Ordered: A1 < A2 < B1 < B2 < C1 < C2.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CefrLevel {
  A1,
  A2,
  B1,
  B2,
  C1,
  C2,
}

impl CefrLevel {
  /// All six levels in canonical pedagogical order.
  pub const ALL: [CefrLevel; 6] = [
    CefrLevel::A1,
    CefrLevel::A2,
    CefrLevel::B1,
    CefrLevel::B2,
    CefrLevel::C1,
    CefrLevel::C2,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      CefrLevel::A1 => "A1",
      CefrLevel::A2 => "A2",
      CefrLevel::B1 => "B1",
      CefrLevel::B2 => "B2",
      CefrLevel::C1 => "C1",
      CefrLevel::C2 => "C2",
    }
  }

  /// Parse a level tag. Accepts surrounding whitespace and lowercase input
  /// ("b1", " A2 ") since tags also arrive from query strings and WS payloads.
  pub fn parse(tag: &str) -> Option<CefrLevel> {
    match normalize_tag(tag).as_str() {
      "A1" => Some(CefrLevel::A1),
      "A2" => Some(CefrLevel::A2),
      "B1" => Some(CefrLevel::B1),
      "B2" => Some(CefrLevel::B2),
      "C1" => Some(CefrLevel::C1),
      "C2" => Some(CefrLevel::C2),
      _ => None,
    }
  }

  /// Position in `ALL`; the level index buckets by this.
  pub(crate) fn index(self) -> usize {
    self as usize
  }
}

impl std::fmt::Display for CefrLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One curriculum unit: a topic plus its vocabulary and grammar content.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lesson {
  pub id: u32,
  pub level: CefrLevel,
  pub topic: String,
  pub vocabulary: Vec<VocabularyItem>,
  pub grammar: Vec<GrammarRule>,
}

impl Lesson {
  /// Checkpoint lessons ("Rương" chests, "THỬ THÁCH" challenges) intentionally
  /// carry no new content. Derived from the content, not stored.
  pub fn is_checkpoint(&self) -> bool {
    self.vocabulary.is_empty() && self.grammar.is_empty()
  }
}

/// One lexical entry of a lesson.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VocabularyItem {
  /// Surface form; may be a multi-word phrase or an acronym.
  pub word: String,
  /// Free-form part-of-speech label ("Noun", "N/V", "Acronym", ...).
  /// Deliberately an open string, not an enum.
  pub kind: String,
  /// Vietnamese gloss.
  pub meaning: String,
}

/// One grammar point of a lesson.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GrammarRule {
  pub name: String,
  /// Symbolic pattern, e.g. "S + am/is/are + N".
  pub form: String,
  /// Vietnamese prose describing when the rule applies.
  pub usage: String,
  pub example: String,
}

/// Errors raised by catalog construction and lookup.
/// Construction errors are content-integrity defects and fatal at startup;
/// `NotFound` is recovered by the caller.
#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("no lesson with id {0}")]
  NotFound(u32),
  #[error("lesson {id}: unknown level tag '{tag}'")]
  InvalidLevelTag { id: u32, tag: String },
  #[error("duplicate lesson id {0}")]
  DuplicateLessonId(u32),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn level_tags_parse_case_insensitively() {
    assert_eq!(CefrLevel::parse("B1"), Some(CefrLevel::B1));
    assert_eq!(CefrLevel::parse(" b1 "), Some(CefrLevel::B1));
    assert_eq!(CefrLevel::parse("c2"), Some(CefrLevel::C2));
    assert_eq!(CefrLevel::parse("HSK3"), None);
    assert_eq!(CefrLevel::parse(""), None);
  }

  #[test]
  fn levels_are_ordered_pedagogically() {
    assert!(CefrLevel::A1 < CefrLevel::A2);
    assert!(CefrLevel::B2 < CefrLevel::C1);
    let mut sorted = CefrLevel::ALL;
    sorted.sort();
    assert_eq!(sorted, CefrLevel::ALL);
  }

  #[test]
  fn display_round_trips_through_parse() {
    for level in CefrLevel::ALL {
      assert_eq!(CefrLevel::parse(level.as_str()), Some(level));
    }
  }

  #[test]
  fn checkpoint_is_derived_from_empty_content() {
    let chest = Lesson {
      id: 3,
      level: CefrLevel::A1,
      topic: "Rương A1/1".into(),
      vocabulary: vec![],
      grammar: vec![],
    };
    assert!(chest.is_checkpoint());

    let content = Lesson {
      id: 1,
      level: CefrLevel::A1,
      topic: "Chào hỏi & Giới thiệu".into(),
      vocabulary: vec![VocabularyItem {
        word: "Hello".into(),
        kind: "Exclamation".into(),
        meaning: "xin chào".into(),
      }],
      grammar: vec![],
    };
    assert!(!content.is_checkpoint());
  }
}
