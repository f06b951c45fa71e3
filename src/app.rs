use std::time::{Duration, Instant};

use crate::models::{CatalogError, Question};
use crate::session::{ResetOutcome, Session, SubmitOutcome};

/// Cosmetic delay before focus returns to the name field after a reset.
pub const FOCUS_DELAY: Duration = Duration::from_millis(300);

/// Which control on the worksheet currently receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The name entry field.
    Name,
    /// The question at this catalog index.
    Question(usize),
}

/// Top-level application state: the session plus everything that is
/// purely presentational (focus, scroll position, the deferred focus
/// shift after a reset).
pub struct App {
    pub session: Session,
    focus: Focus,
    results_scroll: usize,
    pending_focus: Option<Instant>,
}

impl App {
    pub fn new(catalog: Vec<Question>) -> Result<Self, CatalogError> {
        Ok(Self {
            session: Session::new(catalog)?,
            focus: Focus::Name,
            results_scroll: 0,
            pending_focus: None,
        })
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn results_scroll(&self) -> usize {
        self.results_scroll
    }

    /// Apply the deferred focus shift once its deadline has passed.
    /// Called once per event-loop iteration.
    pub fn tick(&mut self) {
        if let Some(deadline) = self.pending_focus {
            if Instant::now() >= deadline {
                self.focus = Focus::Name;
                self.pending_focus = None;
            }
        }
    }

    /// Append a character to the name field.
    pub fn name_push(&mut self, c: char) {
        let mut name = self.session.name().to_string();
        name.push(c);
        self.session.update_name(name);
    }

    /// Delete the last character of the name field.
    pub fn name_pop(&mut self) {
        let mut name = self.session.name().to_string();
        name.pop();
        self.session.update_name(name);
    }

    /// Move focus up: earlier question, or the name field from the first.
    pub fn focus_up(&mut self) {
        self.focus = match self.focus {
            Focus::Question(0) | Focus::Name => Focus::Name,
            Focus::Question(i) => Focus::Question(i - 1),
        };
    }

    /// Move focus down: the first question from the name field,
    /// otherwise the next question (clamped at the last).
    pub fn focus_down(&mut self) {
        let last = self.session.catalog().len() - 1;
        self.focus = match self.focus {
            Focus::Name => Focus::Question(0),
            Focus::Question(i) => Focus::Question((i + 1).min(last)),
        };
    }

    /// Select option `slot` (0..4) for the focused question.
    pub fn select_option(&mut self, slot: usize) {
        let Focus::Question(index) = self.focus else {
            return;
        };
        let Some(question) = self.session.catalog().get(index) else {
            return;
        };
        let Some(option) = question.options.get(slot) else {
            return;
        };
        let (id, option) = (question.id, option.clone());
        self.session.select_answer(id, &option);
    }

    /// Submit the worksheet. A rejected submit pulls focus back to the
    /// name field immediately.
    pub fn submit(&mut self) {
        if let SubmitOutcome::NameRequired = self.session.submit() {
            self.focus = Focus::Name;
        } else {
            self.results_scroll = 0;
        }
    }

    /// Ask for a reset; schedules the focus shift when the session resets
    /// on the spot.
    pub fn request_reset(&mut self) {
        if let ResetOutcome::ResetApplied = self.session.request_reset() {
            self.after_reset();
        }
    }

    /// Confirm a pending reset and schedule the focus shift.
    pub fn confirm_reset(&mut self) {
        self.session.confirm_reset();
        self.after_reset();
    }

    pub fn cancel_reset(&mut self) {
        self.session.cancel_reset();
    }

    pub fn scroll_results_down(&mut self) {
        let max = self.session.catalog().len().saturating_sub(1);
        self.results_scroll = (self.results_scroll + 1).min(max);
    }

    pub fn scroll_results_up(&mut self) {
        self.results_scroll = self.results_scroll.saturating_sub(1);
    }

    fn after_reset(&mut self) {
        self.results_scroll = 0;
        // Overwriting an earlier deadline on rapid repeated resets is fine;
        // the shift only affects focus, never data.
        self.pending_focus = Some(Instant::now() + FOCUS_DELAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::rounding_catalog;

    fn app() -> App {
        App::new(rounding_catalog()).unwrap()
    }

    #[test]
    fn typing_edits_the_name() {
        let mut app = app();
        app.name_push('A');
        app.name_push('n');
        app.name_push('n');
        app.name_pop();
        assert_eq!(app.session.name(), "An");
    }

    #[test]
    fn focus_walks_from_name_through_questions() {
        let mut app = app();
        assert_eq!(app.focus(), Focus::Name);

        app.focus_down();
        assert_eq!(app.focus(), Focus::Question(0));

        app.focus_up();
        assert_eq!(app.focus(), Focus::Name);

        app.focus_up();
        assert_eq!(app.focus(), Focus::Name);
    }

    #[test]
    fn select_option_targets_the_focused_question() {
        let mut app = app();
        app.focus_down(); // question 0 (id 1)
        app.select_option(0);
        assert_eq!(app.session.answer(1), Some("20"));

        app.select_option(9); // out of range, ignored
        assert_eq!(app.session.answer(1), Some("20"));
    }

    #[test]
    fn rejected_submit_refocuses_the_name_field() {
        let mut app = app();
        app.focus_down();
        app.submit();
        assert!(app.session.name_validation_failed());
        assert_eq!(app.focus(), Focus::Name);
    }

    #[test]
    fn clean_reset_schedules_the_focus_shift() {
        let mut app = app();
        app.focus_down();
        app.request_reset();
        assert!(!app.session.reset_confirmation_pending());
        assert!(app.pending_focus.is_some());
    }

    #[test]
    fn confirmed_reset_clears_scroll_and_schedules_focus() {
        let mut app = app();
        app.name_push('A');
        app.request_reset();
        assert!(app.session.reset_confirmation_pending());
        assert!(app.pending_focus.is_none());

        app.confirm_reset();
        assert_eq!(app.session.name(), "");
        assert_eq!(app.results_scroll(), 0);
        assert!(app.pending_focus.is_some());
    }

    #[test]
    fn tick_applies_an_elapsed_focus_deadline() {
        let mut app = app();
        app.focus_down();
        app.pending_focus = Some(Instant::now() - Duration::from_millis(1));
        app.tick();
        assert_eq!(app.focus(), Focus::Name);
        assert!(app.pending_focus.is_none());
    }

    #[test]
    fn results_scroll_is_clamped() {
        let mut app = app();
        for _ in 0..100 {
            app.scroll_results_down();
        }
        assert_eq!(app.results_scroll(), 11);
        app.scroll_results_up();
        assert_eq!(app.results_scroll(), 10);
    }
}
