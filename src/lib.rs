//! Leafwise analysis core.
//!
//! Turns a multimodal model's free-text plant report into structured
//! identification and disease records. The prompt builder and the extractor
//! are pure; the model client, fertilizer advisor, and report export are the
//! collaborators around them.

pub mod analysis;
pub mod analyzer;
pub mod assistant;
pub mod config;
pub mod fertilizer;
pub mod gemini;
pub mod media;
pub mod report;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries embedding the crate. Respects RUST_LOG,
/// falling back to the crate default filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
