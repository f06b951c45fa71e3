//! The quiz session controller.
//!
//! Owns the question catalog and all mutable per-attempt state, and is the
//! only place that state changes: answer collection, name validation,
//! scoring, and the confirm-guarded reset flow.

use std::collections::HashMap;

use crate::models::{validate_catalog, CatalogError, Question};

/// Outcome of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submission accepted; carries the computed score.
    Scored(usize),
    /// Name was empty or whitespace; the caller should focus the name field.
    NameRequired,
}

/// Outcome of a reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// There were answers or a name to lose; confirmation dialog opened.
    ConfirmationPending,
    /// Nothing to lose; the session was reset immediately.
    ResetApplied,
}

/// Per-question correctness after submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
    Unanswered,
}

/// Answer-collection progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    /// Share of the catalog answered, in percent.
    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.answered as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

/// One user's attempt at the worksheet, from start until reset.
pub struct Session {
    catalog: Vec<Question>,
    name: String,
    answers: HashMap<u32, String>,
    submitted: bool,
    score: usize,
    name_validation_failed: bool,
    reset_confirmation_pending: bool,
}

impl Session {
    /// Create a fresh session over `catalog`.
    pub fn new(catalog: Vec<Question>) -> Result<Self, CatalogError> {
        validate_catalog(&catalog)?;
        Ok(Self {
            catalog,
            name: String::new(),
            answers: HashMap::new(),
            submitted: false,
            score: 0,
            name_validation_failed: false,
            reset_confirmation_pending: false,
        })
    }

    pub fn catalog(&self) -> &[Question] {
        &self.catalog
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The selected option for `question_id`, if any.
    pub fn answer(&self, question_id: u32) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// The score computed at submission time. Meaningful only while
    /// [`submitted`](Self::submitted) is true.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn name_validation_failed(&self) -> bool {
        self.name_validation_failed
    }

    pub fn reset_confirmation_pending(&self) -> bool {
        self.reset_confirmation_pending
    }

    /// Record `option` as the answer to `question_id`, overwriting any
    /// earlier selection.
    ///
    /// Silently ignored once submitted, and for ids or options outside the
    /// catalog; `answers` never holds an invalid entry.
    pub fn select_answer(&mut self, question_id: u32, option: &str) {
        if self.submitted {
            return;
        }
        let known = self
            .catalog
            .iter()
            .any(|q| q.id == question_id && q.has_option(option));
        if known {
            self.answers.insert(question_id, option.to_string());
        }
    }

    /// Replace the user's name. Ignored once submitted. A non-empty
    /// trimmed name clears a pending validation failure.
    pub fn update_name(&mut self, new_name: impl Into<String>) {
        if self.submitted {
            return;
        }
        self.name = new_name.into();
        if self.name_validation_failed && !self.name.trim().is_empty() {
            self.name_validation_failed = false;
        }
    }

    /// Score the attempt.
    ///
    /// Rejects an empty or whitespace-only name without touching any other
    /// state. On success the score counts questions whose stored answer
    /// equals the correct one; unanswered questions count as incorrect.
    /// Callers only invoke this before submission.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.name.trim().is_empty() {
            self.name_validation_failed = true;
            return SubmitOutcome::NameRequired;
        }

        self.score = self
            .catalog
            .iter()
            .filter(|q| self.answers.get(&q.id) == Some(&q.correct_answer))
            .count();
        self.submitted = true;
        self.name_validation_failed = false;
        SubmitOutcome::Scored(self.score)
    }

    /// Ask for a reset.
    ///
    /// With something to lose (any answer, or a non-whitespace name, in
    /// either case regardless of submission) this only opens the
    /// confirmation dialog. Otherwise it resets on the spot.
    pub fn request_reset(&mut self) -> ResetOutcome {
        if !self.answers.is_empty() || !self.name.trim().is_empty() {
            self.reset_confirmation_pending = true;
            ResetOutcome::ConfirmationPending
        } else {
            self.confirm_reset();
            ResetOutcome::ResetApplied
        }
    }

    /// Wipe the attempt back to its initial state.
    pub fn confirm_reset(&mut self) {
        self.answers.clear();
        self.name.clear();
        self.submitted = false;
        self.score = 0;
        self.name_validation_failed = false;
        self.reset_confirmation_pending = false;
    }

    /// Close the confirmation dialog, keeping everything else.
    pub fn cancel_reset(&mut self) {
        self.reset_confirmation_pending = false;
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.answers.len(),
            total: self.catalog.len(),
        }
    }

    /// Correctness of the stored answer for `question_id`.
    /// Meaningful only after submission.
    pub fn feedback_for(&self, question_id: u32) -> Feedback {
        let correct = self
            .catalog
            .iter()
            .find(|q| q.id == question_id)
            .map(|q| q.correct_answer.as_str());

        match (self.answers.get(&question_id), correct) {
            (Some(answer), Some(correct)) if answer.as_str() == correct => Feedback::Correct,
            (Some(_), _) => Feedback::Incorrect,
            (None, _) => Feedback::Unanswered,
        }
    }
}
