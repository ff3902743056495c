//! Tiffin Backend Mock - in-memory stand-in for the real POS backend
//!
//! Serves the page-level front-ends static sample data after a simulated
//! network delay. Write operations mutate the shared sample collections in
//! place; nothing survives a restart. The [`PosBackend`] trait is the seam
//! a real backend would plug into without touching the front-ends.

pub mod backend;
pub mod config;
pub mod samples;
pub mod service;
pub mod store;

// Re-exports
pub use backend::MockBackend;
pub use config::MockConfig;
pub use service::PosBackend;
pub use store::SampleStore;
