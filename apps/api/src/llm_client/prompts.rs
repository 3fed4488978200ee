// Shared prompt constants for remote resume generation.
// The profile is appended as pretty-printed JSON by `generation::prompts`.

/// Instruction preamble placed ahead of the candidate data.
pub const RESUME_WRITER_INSTRUCTION: &str = "\
    You are a helpful assistant that writes concise, professional resume content \
    for blue-collar and skilled-trades professionals. Produce:\n\
    1) Professional Summary\n\
    2) Experience\n\
    3) Skills and Certifications\n\
    4) Education\n\n";

/// Label introducing the structured profile data.
pub const USER_DATA_LABEL: &str = "User data (JSON):\n";
