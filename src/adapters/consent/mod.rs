//! Consent persistence adapters.

mod file_consent_store;

pub use file_consent_store::FileConsentStore;
