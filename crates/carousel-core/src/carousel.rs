//! End-to-end carousel build
//!
//! Discover -> normalize each image in order -> optional slide export ->
//! single PDF. Everything runs one step at a time; the PDF is only written
//! once every image has been normalized.

use crate::discover::find_images;
use crate::io::{export_slides, load_image, save_pdf};
use crate::normalize::normalize;
use crate::options::CarouselOptions;
use crate::progress::{CarouselUpdate, ProgressSink};
use crate::render::render_pdf;
use crate::types::*;
use image::RgbImage;
use std::path::Path;

/// Build the carousel described by `options`, reporting to `sink`.
pub async fn build_carousel(
    options: &CarouselOptions,
    sink: &mut dyn ProgressSink,
) -> Result<CarouselSummary> {
    options.validate()?;

    let images = find_images(&options.inputs)?;
    if images.is_empty() {
        return Err(CarouselError::NoImages);
    }

    sink.update(CarouselUpdate::Started {
        slides: images.len(),
        layout: options.layout,
    });

    let canvases = normalize_all(&images, options, sink).await?;

    let exported = match &options.export_dir {
        Some(dir) => {
            let written = export_slides(&canvases, dir, options.quality).await?;
            sink.update(CarouselUpdate::Exported {
                dir: dir.clone(),
                count: written.len(),
            });
            written
        }
        None => Vec::new(),
    };

    let title = document_title(&options.output);
    let slides = canvases.len();
    let quality = options.quality;
    let dpi = options.resolution_dpi;
    let doc =
        tokio::task::spawn_blocking(move || render_pdf(&canvases, quality, dpi, &title)).await??;
    save_pdf(doc, &options.output).await?;

    sink.update(CarouselUpdate::Saved {
        path: options.output.clone(),
    });

    Ok(CarouselSummary {
        slides,
        output: options.output.clone(),
        exported,
    })
}

/// Load and normalize `images` in order
pub async fn normalize_all(
    images: &[impl AsRef<Path>],
    options: &CarouselOptions,
    sink: &mut dyn ProgressSink,
) -> Result<Vec<RgbImage>> {
    let total = images.len();
    let mut canvases = Vec::with_capacity(total);

    for (i, path) in images.iter().enumerate() {
        let path = path.as_ref();
        log::debug!("Normalizing {}", path.display());

        let source = load_image(path).await?;
        let layout = options.layout;
        let canvas = tokio::task::spawn_blocking(move || normalize(&source, &layout)).await??;
        canvases.push(canvas);

        sink.update(CarouselUpdate::Progress {
            operation: "Processing".to_string(),
            current: i + 1,
            total,
        });
    }

    Ok(canvases)
}

/// Title metadata: the output file stem
fn document_title(output: &Path) -> String {
    output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
