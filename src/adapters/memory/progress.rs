//! In-memory element progress repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ElementId, LessonId, UserId};
use crate::domain::lesson::ElementProgress;
use crate::ports::ElementProgressRepository;

#[derive(Default)]
pub struct InMemoryProgressRepository {
    rows: RwLock<HashMap<(UserId, ElementId), ElementProgress>>,
}

impl InMemoryProgressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user_id: &UserId, element_id: ElementId) -> Option<ElementProgress> {
        self.rows
            .read()
            .await
            .get(&(user_id.clone(), element_id))
            .cloned()
    }
}

#[async_trait]
impl ElementProgressRepository for InMemoryProgressRepository {
    async fn upsert(&self, progress: &ElementProgress) -> Result<(), DomainError> {
        self.rows.write().await.insert(
            (progress.user_id.clone(), progress.element_id),
            progress.clone(),
        );
        Ok(())
    }

    async fn completed_elements(
        &self,
        user_id: &UserId,
        lesson_id: LessonId,
    ) -> Result<Vec<ElementId>, DomainError> {
        let mut ids: Vec<ElementId> = self
            .rows
            .read()
            .await
            .values()
            .filter(|p| &p.user_id == user_id && p.lesson_id == lesson_id && p.completed)
            .map(|p| p.element_id)
            .collect();
        ids.sort();
        Ok(ids)
    }
}
