//! Immutable lesson catalog and its level index.
//!
//! Built once at startup from the static curriculum tables. Nothing mutates
//! the catalog after construction, so it is shared freely across handlers
//! and threads without locking.

use std::collections::HashMap;

use crate::curriculum::{LessonDef, LESSONS};
use crate::domain::{CatalogError, CefrLevel, GrammarRule, Lesson, VocabularyItem};

#[derive(Debug)]
pub struct Catalog {
  lessons: Vec<Lesson>,
  by_id: HashMap<u32, usize>,
  by_level: [Vec<usize>; 6],
}

impl Catalog {
  /// Build the catalog from the built-in curriculum.
  pub fn load() -> Result<Self, CatalogError> {
    Self::from_defs(LESSONS)
  }

  /// Build from explicit definitions. One pass in authoring order fills the
  /// owned lessons, the id map, and the per-level buckets, so grouping is
  /// stable by construction. Unknown level tags and duplicate ids abort the
  /// build; a broken table must never degrade into missing lessons.
  fn from_defs(defs: &[LessonDef]) -> Result<Self, CatalogError> {
    let mut lessons = Vec::with_capacity(defs.len());
    let mut by_id = HashMap::with_capacity(defs.len());
    let mut by_level: [Vec<usize>; 6] = Default::default();

    for def in defs {
      let level = CefrLevel::parse(def.level).ok_or_else(|| CatalogError::InvalidLevelTag {
        id: def.id,
        tag: def.level.to_string(),
      })?;

      let idx = lessons.len();
      if by_id.insert(def.id, idx).is_some() {
        return Err(CatalogError::DuplicateLessonId(def.id));
      }
      by_level[level.index()].push(idx);

      lessons.push(Lesson {
        id: def.id,
        level,
        topic: def.topic.to_string(),
        vocabulary: def
          .vocabulary
          .iter()
          .map(|v| VocabularyItem {
            word: v.word.to_string(),
            kind: v.kind.to_string(),
            meaning: v.meaning.to_string(),
          })
          .collect(),
        grammar: def
          .grammar
          .iter()
          .map(|r| GrammarRule {
            name: r.name.to_string(),
            form: r.form.to_string(),
            usage: r.usage.to_string(),
            example: r.example.to_string(),
          })
          .collect(),
      });
    }

    Ok(Self { lessons, by_id, by_level })
  }

  /// Every lesson in canonical authoring order.
  pub fn all_lessons(&self) -> &[Lesson] {
    &self.lessons
  }

  /// Exact-match lookup by id.
  pub fn lesson_by_id(&self, id: u32) -> Result<&Lesson, CatalogError> {
    self
      .by_id
      .get(&id)
      .map(|&idx| &self.lessons[idx])
      .ok_or(CatalogError::NotFound(id))
  }

  /// Lessons tagged with `level`, in catalog order.
  /// Empty for an unpopulated level; that is a valid state, not an error.
  pub fn lessons_for_level(&self, level: CefrLevel) -> Vec<&Lesson> {
    self.by_level[level.index()]
      .iter()
      .map(|&idx| &self.lessons[idx])
      .collect()
  }

  /// The six level tags in canonical pedagogical order, regardless of how
  /// much content each level carries.
  pub fn levels(&self) -> [CefrLevel; 6] {
    CefrLevel::ALL
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  fn catalog() -> Catalog {
    Catalog::load().expect("built-in curriculum must load")
  }

  #[test]
  fn lookup_round_trips_every_lesson() {
    let cat = catalog();
    for lesson in cat.all_lessons() {
      let found = cat.lesson_by_id(lesson.id).expect("lesson must be found");
      assert_eq!(found.id, lesson.id);
      assert_eq!(found.topic, lesson.topic);
      assert_eq!(found.level, lesson.level);
    }
  }

  #[test]
  fn ids_are_unique_across_the_catalog() {
    let cat = catalog();
    let mut seen = HashSet::new();
    for lesson in cat.all_lessons() {
      assert!(seen.insert(lesson.id), "duplicate id {}", lesson.id);
    }
  }

  #[test]
  fn unknown_id_is_not_found() {
    let cat = catalog();
    match cat.lesson_by_id(9999) {
      Err(CatalogError::NotFound(9999)) => {}
      other => panic!("expected NotFound(9999), got {other:?}"),
    }
  }

  #[test]
  fn greetings_lesson_looks_up_with_full_content() {
    let cat = catalog();
    let lesson = cat.lesson_by_id(1).expect("lesson 1");
    assert_eq!(lesson.level, CefrLevel::A1);
    assert_eq!(lesson.topic, "Chào hỏi & Giới thiệu");
    assert_eq!(lesson.vocabulary.len(), 20);
    assert_eq!(lesson.grammar.len(), 5);
  }

  #[test]
  fn grouping_preserves_catalog_order_per_level() {
    let cat = catalog();
    for level in cat.levels() {
      let grouped: Vec<u32> = cat.lessons_for_level(level).iter().map(|l| l.id).collect();
      let filtered: Vec<u32> = cat
        .all_lessons()
        .iter()
        .filter(|l| l.level == level)
        .map(|l| l.id)
        .collect();
      assert_eq!(grouped, filtered, "unstable grouping for {level}");
      assert!(cat.lessons_for_level(level).iter().all(|l| l.level == level));
    }
  }

  #[test]
  fn b1_contains_exactly_its_seven_lessons() {
    let cat = catalog();
    let ids: Vec<u32> = cat
      .lessons_for_level(CefrLevel::B1)
      .iter()
      .map(|l| l.id)
      .collect();
    assert_eq!(ids, vec![16, 17, 18, 19, 20, 21, 22]);
  }

  #[test]
  fn third_a1_lesson_is_an_empty_chest() {
    let cat = catalog();
    let a1 = cat.lessons_for_level(CefrLevel::A1);
    let third = a1[2];
    assert_eq!(third.id, 3);
    assert!(third.vocabulary.is_empty());
    assert!(third.grammar.is_empty());
    assert!(third.is_checkpoint());
  }

  #[test]
  fn challenge_chest_round_trips_empty() {
    let cat = catalog();
    let lesson = cat.lesson_by_id(15).expect("lesson 15");
    assert_eq!(lesson.topic, "THỬ THÁCH A1-A2");
    assert!(lesson.is_checkpoint());
  }

  #[test]
  fn levels_are_always_all_six_in_order() {
    let cat = catalog();
    assert_eq!(cat.levels(), CefrLevel::ALL);
    let tags: Vec<&str> = cat.levels().iter().map(|l| l.as_str()).collect();
    assert_eq!(tags, vec!["A1", "A2", "B1", "B2", "C1", "C2"]);
  }

  #[test]
  fn repeated_queries_return_equal_results() {
    let cat = catalog();
    let first: Vec<u32> = cat
      .lessons_for_level(CefrLevel::A2)
      .iter()
      .map(|l| l.id)
      .collect();
    let second: Vec<u32> = cat
      .lessons_for_level(CefrLevel::A2)
      .iter()
      .map(|l| l.id)
      .collect();
    assert_eq!(first, second);
    assert_eq!(
      cat.lesson_by_id(16).expect("16").topic,
      cat.lesson_by_id(16).expect("16").topic
    );
  }

  #[test]
  fn unknown_level_tag_aborts_construction() {
    let defs = [LessonDef {
      id: 1,
      level: "D1",
      topic: "Bài hỏng",
      vocabulary: &[],
      grammar: &[],
    }];
    match Catalog::from_defs(&defs) {
      Err(CatalogError::InvalidLevelTag { id: 1, tag }) => assert_eq!(tag, "D1"),
      other => panic!("expected InvalidLevelTag, got {other:?}"),
    }
  }

  #[test]
  fn duplicate_id_aborts_construction() {
    let defs = [
      LessonDef { id: 1, level: "A1", topic: "Một", vocabulary: &[], grammar: &[] },
      LessonDef { id: 1, level: "A2", topic: "Hai", vocabulary: &[], grammar: &[] },
    ];
    match Catalog::from_defs(&defs) {
      Err(CatalogError::DuplicateLessonId(1)) => {}
      other => panic!("expected DuplicateLessonId, got {other:?}"),
    }
  }

  #[test]
  fn unpopulated_level_yields_an_empty_sequence() {
    let defs = [LessonDef { id: 1, level: "A1", topic: "Một", vocabulary: &[], grammar: &[] }];
    let cat = Catalog::from_defs(&defs).expect("single-lesson catalog");
    assert!(cat.lessons_for_level(CefrLevel::C2).is_empty());
    assert_eq!(cat.levels(), CefrLevel::ALL);
  }

  #[test]
  fn grouping_uses_the_tag_not_id_ranges() {
    // Deliberately interleaved ids: grouping must follow the tag.
    let defs = [
      LessonDef { id: 1, level: "A2", topic: "Một", vocabulary: &[], grammar: &[] },
      LessonDef { id: 2, level: "A1", topic: "Hai", vocabulary: &[], grammar: &[] },
      LessonDef { id: 3, level: "A2", topic: "Ba", vocabulary: &[], grammar: &[] },
    ];
    let cat = Catalog::from_defs(&defs).expect("interleaved catalog");
    let a2: Vec<u32> = cat.lessons_for_level(CefrLevel::A2).iter().map(|l| l.id).collect();
    assert_eq!(a2, vec![1, 3]);
    let a1: Vec<u32> = cat.lessons_for_level(CefrLevel::A1).iter().map(|l| l.id).collect();
    assert_eq!(a1, vec![2]);
  }
}
