use crate::config::Config;
use crate::generation::synthesizer::TextSynthesizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Remote-first text synthesis with the template fallback.
    pub synthesizer: TextSynthesizer,
    pub config: Config,
}
