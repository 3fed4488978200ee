//! Text Synthesis — produces resume body text from a candidate profile.
//!
//! Flow: capability check (backend configured?) → one remote completion with a
//! bounded wait → on any failure, the deterministic template in `fallback`.
//!
//! Nothing here is fatal. A failed remote call degrades to the template and
//! carries a warning back to the caller; an unconfigured remote is skipped silently.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::generation::fallback::build_fallback_resume;
use crate::generation::prompts::build_resume_prompt;
use crate::llm_client::{CompletionBackend, LlmError};
use crate::models::{CandidateProfile, ResumeText, TextSource};

/// Default bound on the remote call when none is configured.
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(30);

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Why the remote path was not used.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// No credential / client configured. Silent.
    #[error("remote text generation is not configured")]
    Unavailable,

    #[error("failed to build prompt: {0}")]
    Prompt(#[from] serde_json::Error),

    #[error("{0}")]
    CallFailed(#[from] LlmError),

    #[error("timed out after {}s", .0.as_secs())]
    TimedOut(Duration),
}

impl RemoteError {
    /// Whether the caller should be told about this failure.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, RemoteError::Unavailable)
    }
}

/// Result of one synthesis: the text plus an optional non-blocking warning.
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub text: ResumeText,
    pub warning: Option<String>,
}

impl Synthesis {
    pub fn source(&self) -> TextSource {
        self.text.source()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Synthesizer
// ────────────────────────────────────────────────────────────────────────────

/// Remote-first resume writer with a deterministic fallback.
///
/// `backend` is `None` when no credential is configured; the remote boundary is
/// then never touched.
#[derive(Clone)]
pub struct TextSynthesizer {
    backend: Option<Arc<dyn CompletionBackend>>,
    timeout: Duration,
}

impl TextSynthesizer {
    pub fn new(backend: Option<Arc<dyn CompletionBackend>>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// A synthesizer that always uses the template.
    pub fn offline() -> Self {
        Self::new(None, DEFAULT_REMOTE_TIMEOUT)
    }

    pub fn is_remote_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Produces resume text for `profile`. Never fails.
    pub async fn synthesize(&self, profile: &CandidateProfile) -> Synthesis {
        match self.try_remote(profile).await {
            Ok(text) => {
                info!("Resume text generated remotely ({} chars)", text.len());
                Synthesis {
                    text: ResumeText::Generated(text),
                    warning: None,
                }
            }
            Err(e) => {
                let warning = if e.is_reportable() {
                    warn!("Remote text generation failed, using fallback template: {e}");
                    Some(format!(
                        "Remote text generation failed: {e}. Using fallback template."
                    ))
                } else {
                    debug!("Remote text generation not configured; using fallback template");
                    None
                };
                Synthesis {
                    text: build_fallback_resume(profile),
                    warning,
                }
            }
        }
    }

    /// One remote attempt, bounded by `self.timeout`.
    async fn try_remote(&self, profile: &CandidateProfile) -> Result<String, RemoteError> {
        let backend = self.backend.as_ref().ok_or(RemoteError::Unavailable)?;
        let prompt = build_resume_prompt(profile)?;

        let text = tokio::time::timeout(self.timeout, backend.complete(&prompt))
            .await
            .map_err(|_| RemoteError::TimedOut(self.timeout))??;

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(RemoteError::CallFailed(LlmError::EmptyContent));
        }
        Ok(trimmed.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
