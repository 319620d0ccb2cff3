//! Question bank: the fixed, validated list of quiz questions.
//!
//! The built-in questions are compiled into the crate. A bank can also be read
//! from JSON (an array of `{ "prompt", "options", "answer" }` objects), and every
//! record is checked when the bank is built so a malformed entry is rejected up
//! front instead of surfacing mid-game.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Every question offers exactly this many candidate answers.
pub const OPTION_COUNT: usize = 4;

// (prompt, options, answer)
pub const BUILTIN_QUESTIONS: &[(&str, [&str; OPTION_COUNT], &str)] = &[
    ("日本の首都はどこでしょう？", ["東京", "大阪", "京都", "名古屋"], "東京"),
    ("次のうち、アメリカの通貨単位はどれでしょう？", ["ドル", "ユーロ", "円", "ウォン"], "ドル"),
    ("水の化学式は次のうちどれでしょう？", ["H2O", "CO2", "O2", "N2"], "H2O"),
    ("日本で一番面積が広い都道府県はどこでしょう？", ["北海道", "青森", "岩手", "福島"], "北海道"),
    ("次のうち、五円玉に描かれている植物はどれでしょう？", ["稲", "松", "桜", "梅"], "稲"),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl QuestionRecord {
    pub fn new(prompt: &str, options: &[&str], answer: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
        }
    }

    fn validate(&self, index: usize) -> Result<(), QuizError> {
        if self.prompt.trim().is_empty() {
            return Err(QuizError::EmptyPrompt { index });
        }
        if self.options.len() != OPTION_COUNT {
            return Err(QuizError::OptionCount {
                index,
                count: self.options.len(),
                expected: OPTION_COUNT,
            });
        }
        for (i, opt) in self.options.iter().enumerate() {
            if self.options[..i].contains(opt) {
                return Err(QuizError::DuplicateOption {
                    index,
                    option: opt.clone(),
                });
            }
        }
        if !self.options.contains(&self.answer) {
            return Err(QuizError::AnswerNotInOptions {
                index,
                answer: self.answer.clone(),
            });
        }
        Ok(())
    }
}

/// Immutable, validated question list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionBank {
    records: Vec<QuestionRecord>,
}

impl QuestionBank {
    pub fn new(records: Vec<QuestionRecord>) -> Result<Self, QuizError> {
        if records.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        for (index, record) in records.iter().enumerate() {
            record.validate(index)?;
        }
        Ok(Self { records })
    }

    pub fn from_json(text: &str) -> Result<Self, QuizError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(text)?;
        Self::new(records)
    }

    pub fn builtin() -> Self {
        let records = BUILTIN_QUESTIONS
            .iter()
            .map(|(prompt, options, answer)| QuestionRecord::new(prompt, options, answer))
            .collect();
        // Validity of the static table is asserted in tests/bank.rs.
        Self { records }
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
