//! The question screen: number label, wrapped prompt, exit control, options,
//! and whichever feedback is currently showing.

use rand::Rng;

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::quiz::TimerToken;
use crate::render::{Anchor, DrawCmd, TextStyle};
use crate::session::QuestionSession;
use crate::text::wrap_prompt;

use super::{Bounds, FeedbackOverlay, Notice, OptionSet, approx_text_width};

const TEXT_SIZE: f64 = 32.0;
const LINE_HEIGHT: f64 = 40.0;
const NUMBER_AT: (f64, f64) = (32.0, 30.0);
// The prompt starts one line below the number label.
const PROMPT_AT: (f64, f64) = (32.0, 32.0 + LINE_HEIGHT);
const EXIT_AT: (f64, f64) = (348.0, 8.0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionHit {
    Exit,
    Notice,
    Option(usize),
}

#[derive(Clone, Debug)]
pub struct QuestionView {
    pub session: QuestionSession,
    pub options: OptionSet,
    pub prompt_lines: Vec<String>,
    pub notice: Option<Notice>,
    /// Set while the correct-answer overlay is up and the advance is scheduled.
    pub pending: Option<TimerToken>,
    exit: Bounds,
}

impl QuestionView {
    pub fn new<R: Rng + ?Sized>(
        session: QuestionSession,
        config: &QuizConfig,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let record = session.current()?;
        let options = OptionSet::new(record, rng);
        let prompt_lines = wrap_prompt(&record.prompt, config.wrap_width);
        let exit_w = approx_text_width(&config.labels.exit, TEXT_SIZE) + 16.0;
        Ok(Self {
            session,
            options,
            prompt_lines,
            notice: None,
            pending: None,
            exit: Bounds::new(EXIT_AT.0 - 8.0, EXIT_AT.1, exit_w, TEXT_SIZE * 1.5),
        })
    }

    /// "Q." plus the 1-based position in the session.
    pub fn number_label(&self) -> String {
        format!("Q.{}", self.session.current_index() + 1)
    }

    pub fn exit_bounds(&self) -> Bounds {
        self.exit
    }

    /// Resolves a pointer position. While the overlay is pending only the exit
    /// control answers.
    pub fn hit(&self, x: f64, y: f64) -> Option<QuestionHit> {
        if self.exit.contains(x, y) {
            return Some(QuestionHit::Exit);
        }
        if self.pending.is_some() {
            return None;
        }
        if self.notice.as_ref().is_some_and(|n| n.contains(x, y)) {
            return Some(QuestionHit::Notice);
        }
        self.options.control_at(x, y).map(QuestionHit::Option)
    }

    pub fn draw(&self, config: &QuizConfig, out: &mut Vec<DrawCmd>) {
        out.push(DrawCmd::text(
            &self.number_label(),
            NUMBER_AT,
            TextStyle::outlined(TEXT_SIZE),
            Anchor::TopLeft,
        ));
        for (i, line) in self.prompt_lines.iter().enumerate() {
            out.push(DrawCmd::text(
                line,
                (PROMPT_AT.0, PROMPT_AT.1 + LINE_HEIGHT * i as f64),
                TextStyle::outlined(TEXT_SIZE),
                Anchor::TopLeft,
            ));
        }
        out.push(DrawCmd::text(
            &config.labels.exit,
            EXIT_AT,
            TextStyle::outlined(TEXT_SIZE),
            Anchor::TopLeft,
        ));
        self.options.draw(config, out);
        if let Some(notice) = &self.notice {
            notice.draw(config, out);
        }
        if self.pending.is_some() {
            FeedbackOverlay.draw(config, out);
        }
    }
}
