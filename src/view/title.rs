use crate::config::QuizConfig;
use crate::render::{Anchor, DrawCmd, TextStyle};

use super::{Bounds, approx_text_width};

const TITLE_SIZE: f64 = 64.0;
const START_SIZE: f64 = 32.0;
const TITLE_OFFSET: f64 = 100.0;

/// Entry screen: a title label and a single start control.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleView {
    title_at: (f64, f64),
    start_at: (f64, f64),
    start: Bounds,
}

impl TitleView {
    pub fn new(config: &QuizConfig) -> Self {
        let cx = config.width as f64 / 2.0;
        let cy = config.height as f64 / 2.0;
        let start_at = (cx, cy + TITLE_OFFSET);
        let start_w = approx_text_width(&config.labels.start, START_SIZE) + START_SIZE;
        Self {
            title_at: (cx, cy - TITLE_OFFSET),
            start_at,
            start: Bounds::centered(start_at.0, start_at.1, start_w, START_SIZE * 1.5),
        }
    }

    pub fn start_bounds(&self) -> Bounds {
        self.start
    }

    pub fn hits_start(&self, x: f64, y: f64) -> bool {
        self.start.contains(x, y)
    }

    pub fn draw(&self, config: &QuizConfig, out: &mut Vec<DrawCmd>) {
        out.push(DrawCmd::text(
            &config.labels.title,
            self.title_at,
            TextStyle::outlined(TITLE_SIZE),
            Anchor::Center,
        ));
        out.push(DrawCmd::text(
            &config.labels.start,
            self.start_at,
            TextStyle::outlined(START_SIZE),
            Anchor::Center,
        ));
    }
}
