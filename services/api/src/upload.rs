//! Image upload handling for showcase project submissions

use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// File extensions accepted for showcase images
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// URL path under which stored showcase images are exposed
pub const SHOWCASE_IMAGE_URL_PATH: &str = "/uploads/showcase_images";

/// Upload directory configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory showcase images are written to
    pub upload_dir: PathBuf,
}

impl UploadConfig {
    /// Create a new UploadConfig from environment variables
    ///
    /// # Environment Variables
    /// - `UPLOAD_DIR`: upload directory (default: `uploads/showcase_images`)
    pub fn from_env() -> Self {
        let upload_dir = env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "uploads/showcase_images".to_string());

        UploadConfig {
            upload_dir: PathBuf::from(upload_dir),
        }
    }

    /// Create the upload directory if it does not exist
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.upload_dir).await?;
        info!("Upload directory ready at {}", self.upload_dir.display());
        Ok(())
    }
}

/// Check whether a filename carries an allowed image extension
/// (case-insensitive)
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Sanitize an uploaded filename
///
/// Path components are stripped, whitespace becomes underscores, and any
/// character outside `[A-Za-z0-9._-]` is dropped. Returns an empty string
/// when nothing safe remains.
pub fn sanitize_filename(filename: &str) -> String {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);

    let cleaned: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    cleaned.trim_matches('.').to_string()
}

/// Write uploaded bytes to the upload directory under the given filename
pub async fn save_upload(dir: &Path, filename: &str, data: &[u8]) -> std::io::Result<()> {
    fs::write(dir.join(filename), data).await
}
