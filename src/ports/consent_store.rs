//! ConsentStore port - Persisted analytics consent flag.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

#[async_trait]
pub trait ConsentStore: Send + Sync {
    /// The stored decision, or `None` if the learner never chose.
    async fn load(&self) -> Result<Option<bool>, DomainError>;

    async fn save(&self, granted: bool) -> Result<(), DomainError>;
}
