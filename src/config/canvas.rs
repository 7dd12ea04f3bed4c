use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width of the drawing area, in pixels.
    pub width: f64,

    /// Height of the drawing area, in pixels.
    pub height: f64,

    /// Pixels per turtle step.
    pub scale: f64,

    pub stroke_width: f64,

    /// Any CSS color.
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            scale: 1.0,
            stroke_width: 2.0,
            background: String::from("#f0f0f0"),
        }
    }
}

impl CanvasConfig {
    /// Where the turtle's origin lands on the canvas.
    pub fn origin(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}
