//! Prompt assembly for remote resume generation.

use crate::llm_client::prompts::{RESUME_WRITER_INSTRUCTION, USER_DATA_LABEL};
use crate::models::CandidateProfile;

/// Builds the single user-role prompt: fixed instruction followed by the full
/// profile as pretty-printed JSON.
pub fn build_resume_prompt(profile: &CandidateProfile) -> Result<String, serde_json::Error> {
    let profile_json = serde_json::to_string_pretty(profile)?;
    Ok(format!(
        "{RESUME_WRITER_INSTRUCTION}{USER_DATA_LABEL}{profile_json}"
    ))
}
