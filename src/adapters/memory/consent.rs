//! In-memory consent store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::ports::ConsentStore;

#[derive(Default)]
pub struct InMemoryConsentStore {
    granted: RwLock<Option<bool>>,
}

impl InMemoryConsentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decision(granted: bool) -> Self {
        Self {
            granted: RwLock::new(Some(granted)),
        }
    }
}

#[async_trait]
impl ConsentStore for InMemoryConsentStore {
    async fn load(&self) -> Result<Option<bool>, DomainError> {
        Ok(*self.granted.read().await)
    }

    async fn save(&self, granted: bool) -> Result<(), DomainError> {
        *self.granted.write().await = Some(granted);
        Ok(())
    }
}
