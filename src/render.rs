//! Draw commands: the immutable description of a frame.
//!
//! `render` maps the current quiz state to a list of commands without touching
//! the canvas. The host replays the list onto a `CanvasRenderingContext2d`.

use rand::Rng;

use crate::quiz::Quiz;
use crate::view::{Bounds, Screen};

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: &str, width: f64) -> Self {
        Self {
            color: color.to_string(),
            width,
        }
    }
}

/// Where (x, y) sits relative to the text box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

impl Anchor {
    /// Canvas `textAlign` / `textBaseline` pair.
    pub fn canvas_align(self) -> (&'static str, &'static str) {
        match self {
            Anchor::TopLeft => ("left", "top"),
            Anchor::Center => ("center", "middle"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub fill: String,
    pub stroke: Option<Stroke>,
}

impl TextStyle {
    /// Default quiz lettering: black fill with a white outline.
    pub fn outlined(size: f64) -> Self {
        Self {
            size,
            fill: "#000000".to_string(),
            stroke: Some(Stroke::new("#ffffff", 4.0)),
        }
    }

    pub fn plain(size: f64, fill: &str) -> Self {
        Self {
            size,
            fill: fill.to_string(),
            stroke: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear {
        color: String,
    },
    Rect {
        bounds: Bounds,
        fill: String,
        alpha: f64,
        stroke: Option<Stroke>,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        style: TextStyle,
        anchor: Anchor,
    },
}

impl DrawCmd {
    pub fn text(text: &str, at: (f64, f64), style: TextStyle, anchor: Anchor) -> Self {
        DrawCmd::Text {
            text: text.to_string(),
            x: at.0,
            y: at.1,
            style,
            anchor,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawCmd::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// Builds the full frame for the active screen.
pub fn render<R: Rng>(quiz: &Quiz<R>) -> Vec<DrawCmd> {
    let config = quiz.config();
    let mut out = vec![DrawCmd::Clear {
        color: config.background.clone(),
    }];
    match quiz.screen() {
        Screen::Title(view) => view.draw(config, &mut out),
        Screen::Question(view) => view.draw(config, &mut out),
    }
    out
}
