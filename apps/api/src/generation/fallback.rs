//! Deterministic resume synthesis used whenever remote generation is unavailable or fails.
//!
//! Pure function of the profile: the same input always yields the same sections,
//! and the literal strings below are part of the output contract.

use crate::models::{CandidateProfile, ResumeSection, ResumeText, SectionKind};

const CLOSING_CLAUSE: &str = "Known for strong work ethic, safety-first approach, \
    and consistent on-time completion of projects.";

/// Written when no certifications were supplied.
pub const NO_CERTIFICATIONS: &str = "N/A";

/// Builds the template resume: Summary, Experience, Skills, Certifications, Education.
pub fn build_fallback_resume(profile: &CandidateProfile) -> ResumeText {
    let mut sections = vec![
        ResumeSection::paragraph(SectionKind::Summary, summary(profile)),
        ResumeSection::bullets(SectionKind::Experience, experience_bullets(profile)),
        ResumeSection::bullets(SectionKind::Skills, skill_bullets(profile)),
        ResumeSection::paragraph(SectionKind::Certifications, certifications_line(profile)),
    ];

    if let Some(education) = profile.education.as_deref().filter(|e| !e.is_empty()) {
        sections.push(ResumeSection::paragraph(SectionKind::Education, education));
    }

    ResumeText::Template(sections)
}

fn summary(profile: &CandidateProfile) -> String {
    let trade = &profile.trade;
    let mut summary = format!(
        "Reliable {trade} with {} years of experience in {} work. ",
        profile.years_experience,
        trade.to_lowercase()
    );
    if let Some(notes) = profile.special_notes.as_deref().filter(|n| !n.is_empty()) {
        summary.push_str(notes);
        summary.push(' ');
    }
    summary.push_str(CLOSING_CLAUSE);
    summary
}

fn experience_bullets(profile: &CandidateProfile) -> Vec<String> {
    let lines: Vec<String> = profile
        .experience_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if !lines.is_empty() {
        return lines;
    }

    vec![
        format!(
            "Performed {} tasks including installation, maintenance, and repairs.",
            profile.trade.to_lowercase()
        ),
        "Followed safety protocols and maintained jobsite cleanliness.".to_string(),
        "Collaborated with teams to complete projects on schedule.".to_string(),
    ]
}

fn skill_bullets(profile: &CandidateProfile) -> Vec<String> {
    let skills = profile.resolved_skills();
    if !skills.is_empty() {
        return skills;
    }

    vec![
        format!("{} installation", profile.trade),
        "Equipment maintenance".to_string(),
        "Safety compliance".to_string(),
    ]
}

fn certifications_line(profile: &CandidateProfile) -> String {
    if profile.certifications.is_empty() {
        NO_CERTIFICATIONS.to_string()
    } else {
        profile.certifications.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SectionBody;
    use crate::models::CandidateForm;

    fn jane_doe() -> CandidateForm {
        CandidateForm {
            name: "Jane Doe".to_string(),
            trade: "Welder".to_string(),
            years_experience: "5-10".to_string(),
            ..Default::default()
        }
    }

    fn build(form: CandidateForm) -> ResumeText {
        build_fallback_resume(&CandidateProfile::try_from(form).unwrap())
    }

    fn bullets(text: &ResumeText, kind: SectionKind) -> Vec<String> {
        match &text.section(kind).unwrap().body {
            SectionBody::Bullets(items) => items.clone(),
            other => panic!("expected bullets, got {other:?}"),
        }
    }

    fn paragraph(text: &ResumeText, kind: SectionKind) -> String {
        match &text.section(kind).unwrap().body {
            SectionBody::Paragraph(p) => p.clone(),
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_welder_profile_uses_generic_sections() {
        let text = build(jane_doe());

        let summary = paragraph(&text, SectionKind::Summary);
        assert!(summary.starts_with("Reliable Welder with 5-10 years of experience in welder work."));
        assert_eq!(
            summary,
            "Reliable Welder with 5-10 years of experience in welder work. \
             Known for strong work ethic, safety-first approach, and consistent \
             on-time completion of projects."
        );

        assert_eq!(
            bullets(&text, SectionKind::Experience),
            vec![
                "Performed welder tasks including installation, maintenance, and repairs.",
                "Followed safety protocols and maintained jobsite cleanliness.",
                "Collaborated with teams to complete projects on schedule.",
            ]
        );
        assert_eq!(
            bullets(&text, SectionKind::Skills),
            vec!["Welder installation", "Equipment maintenance", "Safety compliance"]
        );
        assert_eq!(paragraph(&text, SectionKind::Certifications), "N/A");
        assert!(text.section(SectionKind::Education).is_none());
    }

    #[test]
    fn test_full_text_matches_exact_layout() {
        let text = build(CandidateForm {
            education: "Trade School Diploma".to_string(),
            ..jane_doe()
        });
        let expected = "PROFESSIONAL SUMMARY\n\
            Reliable Welder with 5-10 years of experience in welder work. Known for strong work ethic, \
            safety-first approach, and consistent on-time completion of projects.\n\
            \n\
            EXPERIENCE\n\
            - Performed welder tasks including installation, maintenance, and repairs.\n\
            - Followed safety protocols and maintained jobsite cleanliness.\n\
            - Collaborated with teams to complete projects on schedule.\n\
            \n\
            SKILLS\n\
            - Welder installation\n\
            - Equipment maintenance\n\
            - Safety compliance\n\
            \n\
            CERTIFICATIONS\n\
            N/A\n\
            \n\
            EDUCATION\n\
            Trade School Diploma";
        assert_eq!(text.to_text(), expected);
    }

    #[test]
    fn test_blank_trade_still_builds_template() {
        let text = build(CandidateForm {
            trade: String::new(),
            ..jane_doe()
        });
        assert!(paragraph(&text, SectionKind::Summary)
            .starts_with("Reliable  with 5-10 years of experience in  work. "));
        assert_eq!(
            bullets(&text, SectionKind::Experience)[0],
            "Performed  tasks including installation, maintenance, and repairs."
        );
        assert_eq!(bullets(&text, SectionKind::Skills)[0], " installation");
    }

    #[test]
    fn test_education_section_included_only_when_present() {
        let with = build(CandidateForm {
            education: "Trade School Diploma".to_string(),
            ..jane_doe()
        });
        assert_eq!(paragraph(&with, SectionKind::Education), "Trade School Diploma");
        assert_eq!(with.sections().last().unwrap().kind, SectionKind::Education);

        let without = build(jane_doe());
        assert!(without.section(SectionKind::Education).is_none());
        assert!(!without.to_text().contains("EDUCATION"));
    }

    #[test]
    fn test_special_notes_inserted_before_closing_clause() {
        let text = build(CandidateForm {
            special_notes: "Certified for pipeline work.".to_string(),
            ..jane_doe()
        });
        let summary = paragraph(&text, SectionKind::Summary);
        assert!(summary.contains(
            "in welder work. Certified for pipeline work. Known for strong work ethic"
        ));
    }

    #[test]
    fn test_experience_lines_trimmed_and_blank_lines_dropped() {
        let text = build(CandidateForm {
            experience_text: "  Built structural steel frames  \n\n\tRepaired farm equipment\n   "
                .to_string(),
            ..jane_doe()
        });
        assert_eq!(
            bullets(&text, SectionKind::Experience),
            vec!["Built structural steel frames", "Repaired farm equipment"]
        );
    }

    #[test]
    fn test_whitespace_only_experience_falls_back_to_generic() {
        let text = build(CandidateForm {
            experience_text: " \n \n".to_string(),
            ..jane_doe()
        });
        assert_eq!(bullets(&text, SectionKind::Experience).len(), 3);
    }

    #[test]
    fn test_skills_from_text_when_list_absent() {
        let text = build(CandidateForm {
            skills_text: "MIG, TIG, Blueprint reading".to_string(),
            ..jane_doe()
        });
        assert_eq!(
            bullets(&text, SectionKind::Skills),
            vec!["MIG", "TIG", "Blueprint reading"]
        );
    }

    #[test]
    fn test_certifications_comma_joined_in_order() {
        let text = build(CandidateForm {
            certifications_text: "AWS D1.1\nOSHA 10\n".to_string(),
            ..jane_doe()
        });
        assert_eq!(paragraph(&text, SectionKind::Certifications), "AWS D1.1, OSHA 10");
    }

    #[test]
    fn test_section_order_is_fixed() {
        let text = build(CandidateForm {
            education: "GED".to_string(),
            ..jane_doe()
        });
        let kinds: Vec<SectionKind> = text.sections().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Summary,
                SectionKind::Experience,
                SectionKind::Skills,
                SectionKind::Certifications,
                SectionKind::Education,
            ]
        );
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let form = CandidateForm {
            skills_text: "Rigging, Cutting".to_string(),
            experience_text: "Shipyard welding".to_string(),
            ..jane_doe()
        };
        let first = build(form.clone()).to_text();
        let second = build(form).to_text();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_multi_word_trade_lowercased_in_prose_only() {
        let text = build(CandidateForm {
            trade: "HVAC Technician".to_string(),
            ..jane_doe()
        });
        assert!(paragraph(&text, SectionKind::Summary)
            .starts_with("Reliable HVAC Technician with 5-10 years of experience in hvac technician work."));
        assert_eq!(bullets(&text, SectionKind::Skills)[0], "HVAC Technician installation");
    }
}
