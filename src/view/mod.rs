//! View state for the two screens of the quiz.
//!
//! Views are plain values: they hold layout and per-screen state, answer hit
//! tests, and describe themselves as draw commands. Nothing here touches the
//! browser; `host` paints what `render` returns.

pub mod feedback;
pub mod options;
pub mod question;
pub mod title;

pub use feedback::{FeedbackOverlay, Notice};
pub use options::{OptionControl, OptionSet};
pub use question::{QuestionHit, QuestionView};
pub use title::TitleView;

/// Axis-aligned rectangle in logical canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of size `w`x`h` centered on (`cx`, `cy`).
    pub fn centered(cx: f64, cy: f64, w: f64, h: f64) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && py >= self.y && px < self.x + self.w && py < self.y + self.h
    }
}

/// The only two reachable screens.
#[derive(Clone, Debug)]
pub enum Screen {
    Title(TitleView),
    Question(QuestionView),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Title(_) => "title",
            Screen::Question(_) => "question",
        }
    }
}

/// Rough rendered width of `text` at `size` px. Wide (non-ASCII) glyphs take a
/// full em, ASCII roughly 0.6 em. Only used for hit boxes around labels.
pub(crate) fn approx_text_width(text: &str, size: f64) -> f64 {
    text.chars()
        .map(|c| if c.is_ascii() { size * 0.6 } else { size })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_is_half_open() {
        let b = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert!(b.contains(10.0, 20.0));
        assert!(b.contains(109.9, 69.9));
        assert!(!b.contains(110.0, 30.0));
        assert!(!b.contains(50.0, 70.0));
        assert!(!b.contains(9.9, 30.0));
    }

    #[test]
    fn test_centered_bounds() {
        let b = Bounds::centered(240.0, 100.0, 80.0, 40.0);
        assert_eq!(b, Bounds::new(200.0, 80.0, 80.0, 40.0));
    }

    #[test]
    fn test_approx_text_width() {
        assert_eq!(approx_text_width("スタート", 32.0), 128.0);
        assert!((approx_text_width("ab", 10.0) - 12.0).abs() < 1e-9);
    }
}
