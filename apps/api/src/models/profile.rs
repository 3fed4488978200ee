//! Candidate input — raw form capture and the validated profile the core consumes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejections raised while turning a form capture into a `CandidateProfile`.
/// These never reach the synthesizer or renderer.
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("Unknown years-of-experience bucket '{0}' (expected one of 0-1, 1-3, 3-5, 5-10, 10+)")]
    UnknownExperienceBucket(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Experience bucket
// ────────────────────────────────────────────────────────────────────────────

/// Fixed years-of-experience ranges offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceBucket {
    #[serde(rename = "0-1")]
    UnderOne,
    #[serde(rename = "1-3")]
    OneToThree,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "5-10")]
    FiveToTen,
    #[serde(rename = "10+")]
    TenPlus,
}

impl ExperienceBucket {
    pub const ALL: [ExperienceBucket; 5] = [
        ExperienceBucket::UnderOne,
        ExperienceBucket::OneToThree,
        ExperienceBucket::ThreeToFive,
        ExperienceBucket::FiveToTen,
        ExperienceBucket::TenPlus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceBucket::UnderOne => "0-1",
            ExperienceBucket::OneToThree => "1-3",
            ExperienceBucket::ThreeToFive => "3-5",
            ExperienceBucket::FiveToTen => "5-10",
            ExperienceBucket::TenPlus => "10+",
        }
    }
}

impl fmt::Display for ExperienceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceBucket {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == trimmed)
            .ok_or_else(|| ProfileError::UnknownExperienceBucket(trimmed.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Contact info
// ────────────────────────────────────────────────────────────────────────────

/// Optional contact fields shown under the heading. Blank values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ContactInfo {
    pub fn new(city: &str, phone: &str, email: &str) -> Self {
        Self {
            city: non_blank(city),
            phone: non_blank(phone),
            email: non_blank(email),
        }
    }

    /// Present fields in display order: city, phone, email.
    pub fn present_fields(&self) -> Vec<&str> {
        [&self.city, &self.phone, &self.email]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .filter(|v| !v.trim().is_empty())
            .collect()
    }

    /// Single contact line with fields joined by `" | "`, or `None` when all are absent.
    pub fn contact_line(&self) -> Option<String> {
        let fields = self.present_fields();
        if fields.is_empty() {
            None
        } else {
            Some(fields.join(" | "))
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Form capture
// ────────────────────────────────────────────────────────────────────────────

/// Raw form capture as produced by the UI / voice collaborators.
///
/// Every field is free text; nothing here is trusted until `CandidateProfile::try_from`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CandidateForm {
    pub name: String,
    pub city: String,
    pub phone: String,
    pub email: String,
    pub trade: String,
    pub years_experience: String,
    pub education: String,
    /// Comma-separated skills.
    pub skills_text: String,
    /// Already-resolved skills. Takes precedence over `skills_text` when non-empty.
    pub skills_list: Option<Vec<String>>,
    /// One certification per line.
    pub certifications_text: String,
    /// One experience item per line.
    pub experience_text: String,
    pub special_notes: String,
}

impl CandidateForm {
    /// Sets a field by its form name. Unknown names are ignored.
    /// Returns `true` when the name matched a field.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "city" => &mut self.city,
            "phone" => &mut self.phone,
            "email" => &mut self.email,
            "trade" => &mut self.trade,
            "years_experience" => &mut self.years_experience,
            "education" => &mut self.education,
            "skills_text" => &mut self.skills_text,
            "certifications_text" | "certifications" => &mut self.certifications_text,
            "experience_text" => &mut self.experience_text,
            "special_notes" => &mut self.special_notes,
            _ => return false,
        };
        *slot = value;
        true
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Validated profile
// ────────────────────────────────────────────────────────────────────────────

/// Structured career details for one candidate. Created per request, never stored.
///
/// Serializes to the structured data embedded in the remote generation prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub name: String,
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub trade: String,
    pub years_experience: ExperienceBucket,
    pub education: Option<String>,
    pub skills_text: String,
    pub skills_list: Vec<String>,
    pub certifications: Vec<String>,
    pub experience_text: String,
    pub special_notes: Option<String>,
}

impl CandidateProfile {
    /// Skills used by synthesis: the resolved list, or the split free text if the list is empty.
    pub fn resolved_skills(&self) -> Vec<String> {
        if self.skills_list.is_empty() {
            split_skills(&self.skills_text)
        } else {
            self.skills_list.clone()
        }
    }
}

impl TryFrom<CandidateForm> for CandidateProfile {
    type Error = ProfileError;

    fn try_from(form: CandidateForm) -> Result<Self, Self::Error> {
        let trade = form.trade.trim().to_string();
        let years_experience: ExperienceBucket = form.years_experience.parse()?;

        let skills_text = form.skills_text.trim().to_string();
        let skills_list = match form.skills_list {
            Some(list) => {
                let cleaned = clean_list(list);
                if cleaned.is_empty() {
                    split_skills(&skills_text)
                } else {
                    cleaned
                }
            }
            None => split_skills(&skills_text),
        };

        Ok(CandidateProfile {
            name: form.name.trim().to_string(),
            contact: ContactInfo::new(&form.city, &form.phone, &form.email),
            trade,
            years_experience,
            education: non_blank(&form.education),
            skills_text,
            skills_list,
            certifications: split_lines(&form.certifications_text),
            experience_text: form.experience_text.trim().to_string(),
            special_notes: non_blank(&form.special_notes),
        })
    }
}

/// Splits comma-separated skills, trimming and dropping empty tokens.
pub fn split_skills(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits on line breaks, trimming and dropping empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean_list(list: Vec<String>) -> Vec<String> {
    list.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
