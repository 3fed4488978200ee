// Resume text synthesis: remote completion first, deterministic template second.
// All remote calls go through llm_client; handlers here also drive rendering.

pub mod fallback;
pub mod handlers;
pub mod prompts;
pub mod synthesizer;
