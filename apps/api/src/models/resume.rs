use serde::Serialize;

/// Which path produced a `ResumeText`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    Generated,
    Fallback,
}

/// Labeled resume sections, in the order they are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Skills,
    Certifications,
    Education,
}

impl SectionKind {
    /// Upper-case heading printed above the section body.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Summary => "PROFESSIONAL SUMMARY",
            SectionKind::Experience => "EXPERIENCE",
            SectionKind::Skills => "SKILLS",
            SectionKind::Certifications => "CERTIFICATIONS",
            SectionKind::Education => "EDUCATION",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SectionBody {
    Paragraph(String),
    Bullets(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeSection {
    pub kind: SectionKind,
    pub body: SectionBody,
}

impl ResumeSection {
    pub fn paragraph(kind: SectionKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            body: SectionBody::Paragraph(text.into()),
        }
    }

    pub fn bullets(kind: SectionKind, items: Vec<String>) -> Self {
        Self {
            kind,
            body: SectionBody::Bullets(items),
        }
    }

    fn to_text(&self) -> String {
        let body = match &self.body {
            SectionBody::Paragraph(text) => text.clone(),
            SectionBody::Bullets(items) => items
                .iter()
                .map(|item| format!("- {item}"))
                .collect::<Vec<_>>()
                .join("\n"),
        };
        format!("{}\n{}", self.kind.label(), body)
    }
}

/// Synthesized resume body, independent of visual formatting. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "content", rename_all = "snake_case")]
pub enum ResumeText {
    /// Remote completion, trimmed, used verbatim.
    Generated(String),
    /// Deterministic template sections.
    Template(Vec<ResumeSection>),
}

impl ResumeText {
    pub fn source(&self) -> TextSource {
        match self {
            ResumeText::Generated(_) => TextSource::Generated,
            ResumeText::Template(_) => TextSource::Fallback,
        }
    }

    /// Template sections; empty for generated text.
    #[cfg(test)]
    pub fn sections(&self) -> &[ResumeSection] {
        match self {
            ResumeText::Generated(_) => &[],
            ResumeText::Template(sections) => sections,
        }
    }

    #[cfg(test)]
    pub fn section(&self, kind: SectionKind) -> Option<&ResumeSection> {
        self.sections().iter().find(|s| s.kind == kind)
    }

    /// Plain body text handed to the renderer. Sections are separated by a blank line.
    pub fn to_text(&self) -> String {
        match self {
            ResumeText::Generated(text) => text.clone(),
            ResumeText::Template(sections) => sections
                .iter()
                .map(ResumeSection::to_text)
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}
