//! Runtime configuration. Every field has a default, so the page can pass a
//! partial JSON object (or nothing at all) to `start_quiz_with_config`.

use serde::{Deserialize, Serialize};

use crate::bank::{QuestionBank, QuestionRecord};
use crate::error::QuizError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub start: String,
    pub exit: String,
    pub correct: String,
    pub incorrect: String,
    pub dismiss_hint: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "クイズゲーム".to_string(),
            start: "スタート".to_string(),
            exit: "EXIT＞".to_string(),
            correct: "正解".to_string(),
            incorrect: "不正解です。".to_string(),
            dismiss_hint: "タップで閉じる".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Id of the element the canvas is mounted into.
    pub container_id: String,
    /// Logical canvas size in pixels.
    pub width: u32,
    pub height: u32,
    /// CSS cap on the displayed canvas size.
    pub max_display: u32,
    /// Below this viewport height the canvas shrinks to `compact_display`.
    pub compact_viewport: u32,
    pub compact_display: u32,
    pub background: String,
    pub font_family: String,
    pub font_url: Option<String>,
    /// Characters per prompt line.
    pub wrap_width: usize,
    pub feedback_delay_ms: u32,
    pub labels: Labels,
    pub questions: Option<Vec<QuestionRecord>>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            container_id: "quiz-game".to_string(),
            width: 480,
            height: 720,
            max_display: 720,
            compact_viewport: 720,
            compact_display: 400,
            background: "#91fff0".to_string(),
            font_family: "Nikumaru".to_string(),
            font_url: None,
            wrap_width: 12,
            feedback_delay_ms: 1000,
            labels: Labels::default(),
            questions: None,
        }
    }
}

impl QuizConfig {
    pub fn from_json(text: &str) -> Result<Self, QuizError> {
        let config: QuizConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.container_id.trim().is_empty() {
            return Err(QuizError::Config("container_id must not be empty".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(QuizError::Config(format!(
                "canvas size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        if self.wrap_width == 0 {
            return Err(QuizError::Config("wrap_width must be at least 1".into()));
        }
        Ok(())
    }

    /// The configured bank override, validated, or the built-in questions.
    pub fn bank(&self) -> Result<QuestionBank, QuizError> {
        match &self.questions {
            Some(records) => QuestionBank::new(records.clone()),
            None => Ok(QuestionBank::builtin()),
        }
    }

    /// CSS font shorthand for the display typeface with a system fallback.
    pub fn font(&self, size: f64) -> String {
        format!("{}px '{}', sans-serif", size, self.font_family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_layout() {
        let cfg = QuizConfig::default();
        assert_eq!((cfg.width, cfg.height), (480, 720));
        assert_eq!(cfg.wrap_width, 12);
        assert_eq!(cfg.feedback_delay_ms, 1000);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = QuizConfig::from_json(r#"{"wrap_width": 8, "labels": {"start": "GO"}}"#).unwrap();
        assert_eq!(cfg.wrap_width, 8);
        assert_eq!(cfg.labels.start, "GO");
        assert_eq!(cfg.labels.title, Labels::default().title);
        assert_eq!(cfg.container_id, "quiz-game");
    }

    #[test]
    fn test_rejects_zero_wrap_width() {
        assert!(matches!(
            QuizConfig::from_json(r#"{"wrap_width": 0}"#),
            Err(QuizError::Config(_))
        ));
    }

    #[test]
    fn test_bank_override_is_validated() {
        let cfg = QuizConfig::from_json(
            r#"{"questions":[{"prompt":"p","options":["a","b","c","d"],"answer":"x"}]}"#,
        )
        .unwrap();
        assert!(matches!(
            cfg.bank(),
            Err(QuizError::AnswerNotInOptions { index: 0, .. })
        ));
        assert_eq!(QuizConfig::default().bank().unwrap(), QuestionBank::builtin());
    }

    #[test]
    fn test_font_shorthand() {
        assert_eq!(QuizConfig::default().font(32.0), "32px 'Nikumaru', sans-serif");
    }
}
