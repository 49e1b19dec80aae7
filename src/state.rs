//! Application state: the loaded catalog and the read-only query layer.
//!
//! This module owns:
//!   - the immutable lesson catalog (built once at startup)
//!   - the query accessors screens are allowed to call
//!
//! There is no write path. Adding a lesson means editing the curriculum
//! tables and restarting the process.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::catalog::Catalog;
use crate::domain::{CatalogError, CefrLevel, Lesson};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Build state: load the built-in curriculum and log the per-level
    /// inventory. A broken curriculum table fails here, at startup.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Result<Self, CatalogError> {
        let catalog = Catalog::load()?;
        info!(target: "lesson", total = catalog.all_lessons().len(), "Curriculum loaded");

        for level in catalog.levels() {
            let lessons = catalog.lessons_for_level(level);
            let checkpoints = lessons.iter().filter(|l| l.is_checkpoint()).count();
            let vocabulary: usize = lessons.iter().map(|l| l.vocabulary.len()).sum();
            info!(target: "lesson", %level, lessons = lessons.len(), checkpoints, vocabulary, "Startup lesson inventory");
        }

        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }

    /// Read-only access to a lesson by id.
    #[instrument(level = "debug", skip(self), fields(%id))]
    pub fn get_lesson(&self, id: u32) -> Result<&Lesson, CatalogError> {
        self.catalog.lesson_by_id(id)
    }

    /// Lessons carrying `level`, in catalog order. Empty is a valid answer.
    #[instrument(level = "debug", skip(self), fields(%level))]
    pub fn lessons_by_level(&self, level: CefrLevel) -> Vec<&Lesson> {
        self.catalog.lessons_for_level(level)
    }

    /// The six CEFR tags in canonical order.
    pub fn levels(&self) -> [CefrLevel; 6] {
        self.catalog.levels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogError;

    #[test]
    fn queries_pass_through_to_the_catalog() {
        let state = AppState::new().expect("state");
        assert_eq!(state.get_lesson(1).expect("lesson 1").id, 1);
        assert_eq!(state.lessons_by_level(CefrLevel::B1).len(), 7);
        assert_eq!(state.levels(), CefrLevel::ALL);
    }

    #[test]
    fn missing_lesson_surfaces_not_found() {
        let state = AppState::new().expect("state");
        assert!(matches!(
            state.get_lesson(9999),
            Err(CatalogError::NotFound(9999))
        ));
    }
}
