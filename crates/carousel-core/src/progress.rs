use crate::types::CanvasLayout;
use std::path::PathBuf;

/// Updates emitted while a carousel is being built
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselUpdate {
    Started {
        slides: usize,
        layout: CanvasLayout,
    },
    Progress {
        operation: String,
        current: usize,
        total: usize,
    },
    Exported {
        dir: PathBuf,
        count: usize,
    },
    Saved {
        path: PathBuf,
    },
}

/// Receiver for build updates.
///
/// Passed explicitly to [`crate::build_carousel`]; a console, a GUI channel
/// or a test recorder can all sit behind it.
pub trait ProgressSink {
    fn update(&mut self, update: CarouselUpdate);
}

/// Sink that drops every update
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl ProgressSink for Silent {
    fn update(&mut self, _update: CarouselUpdate) {}
}

impl ProgressSink for Vec<CarouselUpdate> {
    fn update(&mut self, update: CarouselUpdate) {
        self.push(update);
    }
}

impl CarouselUpdate {
    /// One-line human readable form
    pub fn describe(&self) -> String {
        match self {
            CarouselUpdate::Started { slides, layout } => format!(
                "Slides: {} | Size: {} | Fit: {} | Margin: {}px | BG: {}",
                slides,
                layout.size,
                layout.fit,
                layout.margin,
                layout.background
            ),
            CarouselUpdate::Progress {
                operation,
                current,
                total,
            } => format!("{} {}/{}", operation, current, total),
            CarouselUpdate::Exported { dir, count } => {
                format!("Exported {} slides to {}", count, dir.display())
            }
            CarouselUpdate::Saved { path } => format!("Saved: {}", path.display()),
        }
    }
}

