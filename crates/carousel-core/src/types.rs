use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("--fit must be either 'contain' or 'cover' (got '{0}')")]
    InvalidFitMode(String),
    #[error("Path does not exist: {}", .0.display())]
    MissingPath(PathBuf),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No images found.")]
    NoImages,
}

pub type Result<T> = std::result::Result<T, CarouselError>;

/// How a source image is mapped onto the inner box of the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FitMode {
    /// Scale to fit entirely inside the box, padding the rest with background
    #[default]
    Contain,
    /// Scale to fill the box, center-cropping the overflow
    Cover,
}

impl FitMode {
    pub fn name(self) -> &'static str {
        match self {
            FitMode::Contain => "contain",
            FitMode::Cover => "cover",
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FitMode {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contain" => Ok(FitMode::Contain),
            "cover" => Ok(FitMode::Cover),
            _ => Err(CarouselError::InvalidFitMode(s.to_string())),
        }
    }
}

/// Opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::WHITE
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(color: Rgb) -> Self {
        image::Rgb(color.to_array())
    }
}

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// 4:5 portrait, the default carousel format
    pub const PORTRAIT: CanvasSize = CanvasSize::new(1080, 1350);
    /// 1:1 square
    pub const SQUARE: CanvasSize = CanvasSize::new(1080, 1080);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pick the canvas size from the command-line style inputs.
    ///
    /// An explicit width/height pair wins over `square`. Supplying only one
    /// of the two is rejected.
    pub fn resolve(square: bool, width: Option<u32>, height: Option<u32>) -> Result<Self> {
        match (width, height) {
            (Some(width), Some(height)) => Ok(CanvasSize::new(width, height)),
            (None, None) if square => Ok(CanvasSize::SQUARE),
            (None, None) => Ok(CanvasSize::PORTRAIT),
            _ => Err(CarouselError::Config(
                "If you set --width or --height, you must set both.".to_string(),
            )),
        }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        CanvasSize::PORTRAIT
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Everything the normalizer needs to know about the target canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CanvasLayout {
    pub size: CanvasSize,
    pub fit: FitMode,
    pub background: Rgb,
    /// Uniform inset on all four sides, in pixels
    pub margin: u32,
}

/// Result of a full carousel build
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSummary {
    /// Number of pages in the output PDF
    pub slides: usize,
    pub output: PathBuf,
    /// Per-slide JPEGs, empty when no export directory was given
    pub exported: Vec<PathBuf>,
}
