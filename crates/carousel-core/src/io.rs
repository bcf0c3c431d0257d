//! File I/O for carousel builds

use crate::constants::{SLIDE_EXTENSION, SLIDE_PREFIX};
use crate::render::encode_jpeg;
use crate::types::*;
use image::{DynamicImage, RgbImage};
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Load and decode a single source image
pub async fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let image = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;
    Ok(image)
}

/// Save the assembled document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        doc.compress();
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, CarouselError>(writer)
    })
    .await??;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

/// File name for the slide at 1-based `index` (`slide_01.jpg`)
pub fn slide_file_name(index: usize) -> String {
    format!("{}{:02}.{}", SLIDE_PREFIX, index, SLIDE_EXTENSION)
}

/// Write one JPEG per canvas into `dir`, creating it if needed.
///
/// Files written before a failure are left in place.
pub async fn export_slides(
    canvases: &[RgbImage],
    dir: impl AsRef<Path>,
    quality: u8,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;

    let mut written = Vec::with_capacity(canvases.len());
    for (i, canvas) in canvases.iter().enumerate() {
        let path = dir.join(slide_file_name(i + 1));
        let canvas = canvas.clone();
        let bytes = tokio::task::spawn_blocking(move || encode_jpeg(&canvas, quality)).await??;
        tokio::fs::write(&path, bytes).await?;
        written.push(path);
    }
    Ok(written)
}
