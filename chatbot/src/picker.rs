use crate::error::PickError;
use crate::models::SelectedFile;
use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Stands in for the platform file dialog: only `.pdf` files get through.
pub async fn pick_pdf(file_path: &Path) -> Result<SelectedFile, PickError> {
    let filename = file_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.display().to_string());

    let is_pdf = file_path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(PickError::NotPdf(filename));
    }

    let content = tokio::fs::read(file_path).await.map_err(|source| PickError::Io {
        path: file_path.display().to_string(),
        source,
    })?;

    if !content.starts_with(PDF_MAGIC) {
        log::warn!("{} has no PDF header, the server may reject it", filename);
    }

    log::info!("Selected PDF: {} ({} bytes)", filename, content.len());
    Ok(SelectedFile::new(filename, content))
}
