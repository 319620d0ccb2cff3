//! One playthrough: a shuffled copy of the bank plus a cursor.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::bank::{QuestionBank, QuestionRecord};
use crate::error::QuizError;

#[derive(Clone, Debug)]
pub struct QuestionSession {
    questions: Vec<QuestionRecord>,
    current: usize,
}

impl QuestionSession {
    /// Copies the bank and applies a uniform random permutation. The order is
    /// fixed for the lifetime of the session; `reset` never reshuffles.
    pub fn new<R: Rng + ?Sized>(bank: &QuestionBank, rng: &mut R) -> Self {
        let mut questions = bank.records().to_vec();
        questions.shuffle(rng);
        Self {
            questions,
            current: 0,
        }
    }

    pub fn current(&self) -> Result<&QuestionRecord, QuizError> {
        self.questions.get(self.current).ok_or(QuizError::OutOfRange {
            index: self.current,
            len: self.questions.len(),
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    /// Moves the cursor forward without a bound check; callers consult
    /// `is_finished` first.
    pub fn advance(&mut self) {
        self.current += 1;
    }

    /// True once the cursor sits on the last question.
    pub fn is_finished(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}
