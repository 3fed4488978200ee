//! Certificate attachment storage and download naming.
//!
//! Uploaded certificate files are kept under `<root>/<candidate dir>/` after a
//! document has rendered. Storage is best-effort: the caller logs failures and
//! still returns the document.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::debug;

const DEFAULT_DIR_NAME: &str = "user";
const DEFAULT_DOWNLOAD_STEM: &str = "resume";

/// One uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedAttachments {
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Directory name for a candidate: whitespace and path separators become
/// underscores; empty or dot-only names fall back to `user`.
pub fn candidate_dir_name(name: &str) -> String {
    let dir: String = name
        .trim()
        .chars()
        .map(|c| if c == ' ' || c == '/' || c == '\\' { '_' } else { c })
        .collect();
    if dir.is_empty() || dir == "." || dir == ".." {
        DEFAULT_DIR_NAME.to_string()
    } else {
        dir
    }
}

/// File name offered for the rendered document download.
pub fn download_file_name(name: &str) -> String {
    let stem: String = name
        .trim()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_graphic() && !matches!(c, '"' | '\\' | '/' | ';'))
        .collect();
    if stem.is_empty() {
        format!("{DEFAULT_DOWNLOAD_STEM}.pdf")
    } else {
        format!("{stem}.pdf")
    }
}

/// Base name of an uploaded file with any client-side directory parts removed.
fn base_file_name(raw: &str) -> Option<String> {
    let base = raw.rsplit(['/', '\\']).next()?.trim();
    if base.is_empty() || base == "." || base == ".." {
        None
    } else {
        Some(base.to_string())
    }
}

/// Writes every named attachment into the candidate's directory under `root`.
pub async fn save_attachments(
    root: &Path,
    candidate_name: &str,
    attachments: &[Attachment],
) -> std::io::Result<SavedAttachments> {
    let dir = root.join(candidate_dir_name(candidate_name));
    tokio::fs::create_dir_all(&dir).await?;

    let mut files = Vec::with_capacity(attachments.len());
    for attachment in attachments {
        let Some(file_name) = attachment.file_name.as_deref().and_then(base_file_name) else {
            debug!("Skipping certificate upload without a file name");
            continue;
        };
        let path = dir.join(file_name);
        tokio::fs::write(&path, &attachment.bytes).await?;
        files.push(path);
    }

    Ok(SavedAttachments { dir, files })
}
