//! In-memory adapters for tests and database-free local runs.

mod analytics_store;
mod consent;
mod lesson_content;
mod progress;
mod variants;

pub use analytics_store::InMemoryAnalyticsStore;
pub use consent::InMemoryConsentStore;
pub use lesson_content::InMemoryLessonContent;
pub use progress::InMemoryProgressRepository;
pub use variants::InMemoryVariantRepository;
