//! Visual themes and per-render options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const NEUTRAL: Rgb = Rgb(0, 0, 0);
    pub const ACCENT_BLUE: Rgb = Rgb(0, 102, 204);

    /// Components scaled to 0.0–1.0 for PDF color operators.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

/// Named resume templates. Identifiers outside the known set are kept as
/// `Unknown` and render with the neutral color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Template {
    #[default]
    ModernBlue,
    ClassicGray,
    MinimalistBlackWhite,
    Unknown(String),
}

impl Template {
    pub const KNOWN: [Template; 3] = [
        Template::ModernBlue,
        Template::ClassicGray,
        Template::MinimalistBlackWhite,
    ];

    pub fn id(&self) -> &str {
        match self {
            Template::ModernBlue => "Modern Blue",
            Template::ClassicGray => "Classic Gray",
            Template::MinimalistBlackWhite => "Minimalist Black & White",
            Template::Unknown(id) => id,
        }
    }

    /// Heading color: only Modern Blue carries an accent.
    pub fn heading_color(&self) -> Rgb {
        match self {
            Template::ModernBlue => Rgb::ACCENT_BLUE,
            _ => Rgb::NEUTRAL,
        }
    }
}

impl From<&str> for Template {
    fn from(id: &str) -> Self {
        let id = id.trim();
        Self::KNOWN
            .into_iter()
            .find(|t| t.id() == id)
            .unwrap_or_else(|| Template::Unknown(id.to_string()))
    }
}

impl From<String> for Template {
    fn from(id: String) -> Self {
        Template::from(id.as_str())
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.id().to_string()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Theme and optional photo for one render.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub template: Template,
    /// Raw uploaded image bytes (any format the decoder understands).
    pub photo: Option<Vec<u8>>,
}

impl RenderOptions {
    pub fn heading_color(&self) -> Rgb {
        self.template.heading_color()
    }
}
