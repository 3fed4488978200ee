pub mod profile;
pub mod resume;

pub use profile::{CandidateForm, CandidateProfile, ContactInfo, ProfileError};
pub use resume::{ResumeSection, ResumeText, SectionKind, TextSource};
