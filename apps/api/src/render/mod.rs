//! Document rendering: resume text plus identity details into a paginated PDF.
//!
//! The pipeline is synchronous and CPU-bound; HTTP handlers run it on the
//! blocking pool.

pub mod encoding;
pub mod font_metrics;
pub mod layout;
pub mod pdf_writer;
pub mod photo;
pub mod theme;

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::profile::ContactInfo;
use crate::render::encoding::to_single_byte_text;
use crate::render::layout::{lay_out, LayoutInput};
use crate::render::photo::{prepare_photo, EmbeddedPhoto};

pub use theme::{RenderOptions, Template};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode page content: {0}")]
    Content(String),

    #[error("failed to serialize document: {0}")]
    Serialize(String),
}

/// A finished PDF and a few facts about it.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
    page_count: usize,
    has_photo: bool,
}

impl RenderedDocument {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn has_photo(&self) -> bool {
        self.has_photo
    }
}

/// Renders the resume document.
///
/// A photo that cannot be processed is left out with a warning; the rest of
/// the document renders normally. Characters outside the single-byte range are
/// dropped from every string.
pub fn render_resume(
    resume_text: &str,
    name: &str,
    contact: &ContactInfo,
    options: &RenderOptions,
) -> Result<RenderedDocument, RenderError> {
    let photo = options.photo.as_deref().and_then(load_photo);

    let name = to_single_byte_text(name);
    let name = name.trim();
    let contact_line = contact.contact_line().map(|line| to_single_byte_text(&line));
    let body = to_single_byte_text(resume_text);

    let pages = lay_out(&LayoutInput {
        name,
        contact_line: contact_line.as_deref(),
        body: &body,
        heading_color: options.heading_color(),
        include_photo: photo.is_some(),
    });

    let bytes = pdf_writer::write_pdf(&pages, photo.as_ref(), name)?;
    debug!(
        "Rendered {} page(s), {} bytes, template '{}', photo: {}",
        pages.len(),
        bytes.len(),
        options.template,
        photo.is_some()
    );

    Ok(RenderedDocument {
        bytes,
        page_count: pages.len(),
        has_photo: photo.is_some(),
    })
}

fn load_photo(bytes: &[u8]) -> Option<EmbeddedPhoto> {
    match prepare_photo(bytes) {
        Ok(photo) => Some(photo),
        Err(e) => {
            warn!("Omitting photo from document: {e}");
            None
        }
    }
}
