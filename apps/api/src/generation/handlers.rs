//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::attachments::{download_file_name, save_attachments, Attachment};
use crate::errors::AppError;
use crate::models::{CandidateForm, CandidateProfile, ContactInfo, TextSource};
use crate::render::{render_resume, RenderOptions, RenderedDocument, Template};
use crate::state::AppState;

/// Response header carrying the synthesizer's degradation warning, if any.
pub const WARNING_HEADER: HeaderName = HeaderName::from_static("x-resume-warning");

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ResumeTextResponse {
    pub source: TextSource,
    pub resume_text: String,
    pub warning: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub resume_text: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub template: Template,
    /// Standard base64 of the photo file.
    #[serde(default)]
    pub photo_base64: Option<String>,
}

/// Everything a multipart resume submission carries.
#[derive(Debug, Default)]
struct ResumeSubmission {
    form: CandidateForm,
    template: Template,
    photo: Option<Vec<u8>>,
    certificates: Vec<Attachment>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/text
///
/// Synthesizes resume text only, so the caller can review and edit it before rendering.
pub async fn handle_generate_text(
    State(state): State<AppState>,
    Json(form): Json<CandidateForm>,
) -> Result<Json<ResumeTextResponse>, AppError> {
    let profile = CandidateProfile::try_from(form)?;
    let synthesis = state.synthesizer.synthesize(&profile).await;

    Ok(Json(ResumeTextResponse {
        source: synthesis.source(),
        resume_text: synthesis.text.to_text(),
        warning: synthesis.warning,
    }))
}

/// POST /api/v1/resumes/pdf
///
/// Full pipeline: form → synthesized text → rendered PDF → certificate storage.
/// A degraded synthesis is reported through the `x-resume-warning` header.
pub async fn handle_generate_pdf(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let submission = read_submission(multipart).await?;
    let profile = CandidateProfile::try_from(submission.form)?;

    let synthesis = state.synthesizer.synthesize(&profile).await;
    let resume_text = synthesis.text.to_text();

    let options = RenderOptions {
        template: submission.template,
        photo: submission.photo,
    };
    let document = render_on_blocking_pool(
        resume_text,
        profile.name.clone(),
        profile.contact.clone(),
        options,
    )
    .await?;

    if !submission.certificates.is_empty() {
        match save_attachments(
            &state.config.certificates_dir,
            &profile.name,
            &submission.certificates,
        )
        .await
        {
            Ok(saved) => info!(
                "Saved {} certificate file(s) to {}",
                saved.files.len(),
                saved.dir.display()
            ),
            Err(e) => warn!("Failed to save certificate uploads: {e}"),
        }
    }

    info!(
        "Resume PDF generated ({:?} text, {} page(s), {} bytes, photo: {})",
        synthesis.source(),
        document.page_count(),
        document.bytes().len(),
        document.has_photo()
    );
    Ok(pdf_response(document, &profile.name, synthesis.warning.as_deref()))
}

/// POST /api/v1/resumes/render
///
/// Renders caller-supplied (typically edited) resume text without synthesis.
pub async fn handle_render(Json(request): Json<RenderRequest>) -> Result<Response, AppError> {
    let photo = request.photo_base64.as_deref().and_then(decode_photo);
    let options = RenderOptions {
        template: request.template,
        photo,
    };

    let name = request.name;
    let document =
        render_on_blocking_pool(request.resume_text, name.clone(), request.contact, options)
            .await?;
    Ok(pdf_response(document, &name, None))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn read_submission(mut multipart: Multipart) -> Result<ResumeSubmission, AppError> {
    let mut submission = ResumeSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "photo" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read photo: {e}")))?;
                if !bytes.is_empty() {
                    submission.photo = Some(bytes.to_vec());
                }
            }
            "certificates" => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read certificate upload: {e}"))
                })?;
                submission.certificates.push(Attachment { file_name, bytes });
            }
            _ => {
                let value = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read field '{name}': {e}"))
                })?;
                if name == "template" {
                    submission.template = Template::from(value.as_str());
                } else if name == "skills_list" {
                    submission
                        .form
                        .skills_list
                        .get_or_insert_with(Vec::new)
                        .push(value);
                } else if !submission.form.set_field(&name, value) {
                    debug!("Ignoring unknown form field '{name}'");
                }
            }
        }
    }

    Ok(submission)
}

/// Decodes an uploaded photo; anything undecodable is treated like an unreadable image.
fn decode_photo(encoded: &str) -> Option<Vec<u8>> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return None;
    }
    match base64::engine::general_purpose::STANDARD.decode(encoded) {
        Ok(bytes) if !bytes.is_empty() => Some(bytes),
        Ok(_) => None,
        Err(e) => {
            warn!("Omitting photo: invalid base64 ({e})");
            None
        }
    }
}

/// Runs the CPU-bound render off the async executor.
async fn render_on_blocking_pool(
    resume_text: String,
    name: String,
    contact: ContactInfo,
    options: RenderOptions,
) -> Result<RenderedDocument, AppError> {
    let document = tokio::task::spawn_blocking(move || {
        render_resume(&resume_text, &name, &contact, &options)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))??;
    Ok(document)
}

fn pdf_response(document: RenderedDocument, name: &str, warning: Option<&str>) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));

    let disposition = format!("attachment; filename=\"{}\"", download_file_name(name));
    if let Ok(value) = HeaderValue::from_str(&disposition) {
        headers.insert(header::CONTENT_DISPOSITION, value);
    }

    if let Some(warning) = warning {
        let ascii: String = warning
            .chars()
            .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { ' ' })
            .collect();
        match HeaderValue::from_str(&ascii) {
            Ok(value) => {
                headers.insert(WARNING_HEADER, value);
            }
            Err(e) => warn!("Dropping unrepresentable warning header: {e}"),
        }
    }

    (headers, document.into_bytes()).into_response()
}
