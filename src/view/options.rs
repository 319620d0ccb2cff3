//! The four answer controls of a question and the per-view selection.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::bank::QuestionRecord;
use crate::config::QuizConfig;
use crate::render::{Anchor, DrawCmd, Stroke, TextStyle};

use super::Bounds;

const BOX_X: f64 = 40.0;
const BOX_TOP: f64 = 380.0;
const BOX_STEP: f64 = 80.0;
const BOX_W: f64 = 400.0;
const BOX_H: f64 = 64.0;
const LABEL_INSET: (f64, f64) = (16.0, 13.0);
const LABEL_SIZE: f64 = 32.0;

#[derive(Clone, Debug, PartialEq)]
pub struct OptionControl {
    /// 1-based position in the stack.
    pub ordinal: usize,
    pub text: String,
    pub bounds: Bounds,
}

impl OptionControl {
    pub fn label(&self) -> String {
        format!("{}. {}", self.ordinal, self.text)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionSet {
    controls: Vec<OptionControl>,
    answer: String,
    selected: Option<String>,
}

impl OptionSet {
    /// Lays the record's options out in a fresh random order, independent of
    /// the question order.
    pub fn new<R: Rng + ?Sized>(record: &QuestionRecord, rng: &mut R) -> Self {
        let mut words = record.options.clone();
        words.shuffle(rng);
        let controls = words
            .into_iter()
            .enumerate()
            .map(|(i, text)| OptionControl {
                ordinal: i + 1,
                text,
                bounds: Bounds::new(BOX_X, BOX_TOP + BOX_STEP * i as f64, BOX_W, BOX_H),
            })
            .collect();
        Self {
            controls,
            answer: record.answer.clone(),
            selected: None,
        }
    }

    pub fn controls(&self) -> &[OptionControl] {
        &self.controls
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn control_at(&self, x: f64, y: f64) -> Option<usize> {
        self.controls.iter().position(|c| c.bounds.contains(x, y))
    }

    /// Records the control's text as the current selection, replacing any
    /// earlier pick.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let control = self.controls.get(index)?;
        self.selected = Some(control.text.clone());
        self.selected.as_deref()
    }

    pub fn is_correct(&self) -> bool {
        self.selected.as_deref() == Some(self.answer.as_str())
    }

    pub fn draw(&self, _config: &QuizConfig, out: &mut Vec<DrawCmd>) {
        for control in &self.controls {
            out.push(DrawCmd::Rect {
                bounds: control.bounds,
                fill: "#ffffff".to_string(),
                alpha: 1.0,
                stroke: Some(Stroke::new("#000000", 4.0)),
            });
            out.push(DrawCmd::text(
                &control.label(),
                (control.bounds.x + LABEL_INSET.0, control.bounds.y + LABEL_INSET.1),
                TextStyle::outlined(LABEL_SIZE),
                Anchor::TopLeft,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record() -> QuestionRecord {
        QuestionRecord::new("水の化学式は？", &["H2O", "CO2", "O2", "N2"], "H2O")
    }

    #[test]
    fn test_exactly_one_control_carries_answer() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let set = OptionSet::new(&record(), &mut rng);
            assert_eq!(set.controls().len(), 4);
            let hits = set.controls().iter().filter(|c| c.text == "H2O").count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn test_controls_are_stacked_with_ordinals() {
        let mut rng = StdRng::seed_from_u64(4);
        let set = OptionSet::new(&record(), &mut rng);
        for (i, c) in set.controls().iter().enumerate() {
            assert_eq!(c.ordinal, i + 1);
            assert_eq!(c.bounds.y, 380.0 + 80.0 * i as f64);
            assert!(c.label().starts_with(&format!("{}. ", i + 1)));
        }
        assert_eq!(set.control_at(50.0, 390.0), Some(0));
        assert_eq!(set.control_at(50.0, 650.0), Some(3));
        assert_eq!(set.control_at(50.0, 450.0), None); // gap between boxes
        assert_eq!(set.control_at(10.0, 390.0), None);
    }

    #[test]
    fn test_selection_overwrites_and_checks() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut set = OptionSet::new(&record(), &mut rng);
        assert!(set.selected().is_none());
        assert!(!set.is_correct());

        let answer_idx = set.controls().iter().position(|c| c.text == "H2O").unwrap();
        let wrong_idx = (answer_idx + 1) % 4;

        set.select(wrong_idx);
        assert!(!set.is_correct());
        set.select(answer_idx);
        assert_eq!(set.selected(), Some("H2O"));
        assert!(set.is_correct());
        assert!(set.select(9).is_none());
    }
}
