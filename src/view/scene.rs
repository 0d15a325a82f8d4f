//! Window layout for the timer: title, fixed size, digit font and cell spacing

pub const DEFAULT_TITLE: &str = "Graphical Timer";
/// Window width in logical points
pub const SCENE_WIDTH: f32 = 200.0;
/// Window height in logical points
pub const SCENE_HEIGHT: f32 = 100.0;
/// Point size of the digit labels
pub const DIGIT_FONT_SIZE: f32 = 40.0;
/// Horizontal gap between grid cells
pub const HGAP: f32 = 5.0;

/// A titled window of fixed logical size that hosts the timer grid
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    title: String,
    width: f32,
    height: f32,
    font_size: f32,
    hgap: f32,
}

impl Scene {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
            font_size: DIGIT_FONT_SIZE,
            hgap: HGAP,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Logical [width, height], as eframe viewports take it
    pub fn size(&self) -> [f32; 2] {
        [self.width, self.height]
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn hgap(&self) -> f32 {
        self.hgap
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
