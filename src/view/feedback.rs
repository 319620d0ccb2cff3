//! Transient answer feedback: the correct-answer overlay and the dismissible
//! wrong-answer notice.

use crate::config::QuizConfig;
use crate::render::{Anchor, DrawCmd, Stroke, TextStyle};

use super::Bounds;

const BANNER_SIZE: f64 = 128.0;
const BANNER_Y: f64 = 300.0;
const BANNER_STROKE: f64 = 16.0;
const DIM_ALPHA: f64 = 0.5;

const NOTICE_BOUNDS: Bounds = Bounds::new(40.0, 284.0, 400.0, 80.0);
const NOTICE_SIZE: f64 = 32.0;
const HINT_SIZE: f64 = 16.0;

/// Full-canvas dim layer plus the large outlined "correct" banner. Lives only
/// as long as the question view that raised it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FeedbackOverlay;

impl FeedbackOverlay {
    pub fn draw(&self, config: &QuizConfig, out: &mut Vec<DrawCmd>) {
        out.push(DrawCmd::Rect {
            bounds: Bounds::new(0.0, 0.0, config.width as f64, config.height as f64),
            fill: "#000000".to_string(),
            alpha: DIM_ALPHA,
            stroke: None,
        });
        let style = TextStyle {
            stroke: Some(Stroke::new("#ffffff", BANNER_STROKE)),
            ..TextStyle::outlined(BANNER_SIZE)
        };
        out.push(DrawCmd::text(
            &config.labels.correct,
            (config.width as f64 / 2.0, BANNER_Y),
            style,
            Anchor::Center,
        ));
    }
}

/// Wrong-answer banner. Does not block input: the options below stay live and
/// the banner goes away when tapped or when another option is picked.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub bounds: Bounds,
}

impl Notice {
    pub fn incorrect(config: &QuizConfig) -> Self {
        Self {
            message: config.labels.incorrect.clone(),
            bounds: NOTICE_BOUNDS,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.bounds.contains(x, y)
    }

    pub fn draw(&self, config: &QuizConfig, out: &mut Vec<DrawCmd>) {
        let b = self.bounds;
        out.push(DrawCmd::Rect {
            bounds: b,
            fill: "#ff6b6b".to_string(),
            alpha: 0.92,
            stroke: Some(Stroke::new("#000000", 4.0)),
        });
        let cx = b.x + b.w / 2.0;
        out.push(DrawCmd::text(
            &self.message,
            (cx, b.y + b.h * 0.4),
            TextStyle::outlined(NOTICE_SIZE),
            Anchor::Center,
        ));
        out.push(DrawCmd::text(
            &config.labels.dismiss_hint,
            (cx, b.y + b.h * 0.8),
            TextStyle::plain(HINT_SIZE, "#222222"),
            Anchor::Center,
        ));
    }
}
