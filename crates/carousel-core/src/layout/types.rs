/// Integer pixel rectangle, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// How a source of a given size lands on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitPlan {
    /// Region of the source that survives (the whole source for contain)
    pub crop: PixelRect,
    /// Size the cropped region is resampled to
    pub scaled: (u32, u32),
    /// Where the resampled image is pasted on the canvas
    pub placement: PixelRect,
}
