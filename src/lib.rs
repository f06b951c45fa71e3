//! # math-worksheet
//!
//! A terminal math worksheet: a fixed set of multiple-choice rounding
//! questions, a name field, submit-time scoring with per-question
//! feedback, and a confirm-guarded reset.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use math_worksheet::{rounding_catalog, Worksheet, WorksheetError};
//!
//! fn main() -> Result<(), WorksheetError> {
//!     let worksheet = Worksheet::new(rounding_catalog())?;
//!     worksheet.run()?;
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
mod session;
pub mod terminal;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Focus, FOCUS_DELAY};
pub use data::rounding_catalog;
pub use models::{validate_catalog, CatalogError, Question};
pub use session::{
    encouragement_message, Feedback, Progress, ResetOutcome, Session, SubmitOutcome,
};

/// Keyboard poll interval; also bounds how late the post-reset focus
/// shift can land.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Error type for worksheet operations.
#[derive(Debug)]
pub enum WorksheetError {
    /// The supplied question catalog was invalid.
    Catalog(CatalogError),
    /// IO error while driving the terminal.
    Io(io::Error),
}

impl std::fmt::Display for WorksheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorksheetError::Catalog(e) => write!(f, "Invalid question catalog: {}", e),
            WorksheetError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for WorksheetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorksheetError::Catalog(e) => Some(e),
            WorksheetError::Io(e) => Some(e),
        }
    }
}

impl From<CatalogError> for WorksheetError {
    fn from(err: CatalogError) -> Self {
        WorksheetError::Catalog(err)
    }
}

impl From<io::Error> for WorksheetError {
    fn from(err: io::Error) -> Self {
        WorksheetError::Io(err)
    }
}

/// A worksheet instance that can be run in the terminal.
pub struct Worksheet {
    app: App,
}

impl Worksheet {
    /// Create a worksheet over a question catalog.
    pub fn new(catalog: Vec<Question>) -> Result<Self, WorksheetError> {
        Ok(Self {
            app: App::new(catalog)?,
        })
    }

    /// Run the worksheet in the terminal.
    ///
    /// Takes over the terminal, displays the worksheet UI, and returns
    /// when the user quits.
    pub fn run(mut self) -> Result<(), WorksheetError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(
    terminal: &mut terminal::WorksheetTerminal,
    app: &mut App,
) -> Result<(), WorksheetError> {
    loop {
        app.tick();
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if app.session.reset_confirmation_pending() {
        handle_confirm_input(app, key)
    } else if app.session.submitted() {
        handle_results_input(app, key)
    } else {
        handle_worksheet_input(app, key)
    }
}

fn handle_confirm_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_reset(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_reset(),
        _ => {}
    }
    false
}

fn handle_worksheet_input(app: &mut App, key: KeyCode) -> bool {
    match app.focus() {
        Focus::Name => handle_name_input(app, key),
        Focus::Question(_) => handle_question_input(app, key),
    }
}

fn handle_name_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.submit();
            false
        }
        KeyCode::Backspace => {
            app.name_pop();
            false
        }
        KeyCode::Tab | KeyCode::Down => {
            app.focus_down();
            false
        }
        KeyCode::Char(c) => {
            app.name_push(c);
            false
        }
        KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_question_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.focus_up();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.focus_down();
            false
        }
        KeyCode::Char(c @ 'a'..='d') => {
            app.select_option(c as usize - 'a' as usize);
            false
        }
        KeyCode::Char(c @ '1'..='4') => {
            app.select_option(c as usize - '1' as usize);
            false
        }
        KeyCode::Enter => {
            app.submit();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.request_reset();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.request_reset();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(rounding_catalog()).unwrap()
    }

    fn fill_and_submit(app: &mut App) {
        while app.focus() != Focus::Name {
            handle_input(app, KeyCode::Up);
        }
        for c in "Ann".chars() {
            handle_input(app, KeyCode::Char(c));
        }
        handle_input(app, KeyCode::Enter);
        assert!(app.session.submitted());
    }

    #[test]
    fn typing_on_the_name_field_edits_the_name() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('A'));
        handle_input(&mut app, KeyCode::Char('n'));
        handle_input(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.name(), "A");
    }

    #[test]
    fn enter_submits_from_the_name_field() {
        let mut app = app();
        fill_and_submit(&mut app);
        assert_eq!(app.session.score(), 0);
    }

    #[test]
    fn enter_with_a_blank_name_flags_validation() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Enter);
        assert!(app.session.name_validation_failed());
        assert!(!app.session.submitted());
    }

    #[test]
    fn enter_does_not_resubmit_after_submission() {
        let mut app = app();
        fill_and_submit(&mut app);
        // On the results screen Enter is inert.
        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert!(app.session.submitted());
    }

    #[test]
    fn letter_keys_answer_the_focused_question() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Tab); // focus question 1
        handle_input(&mut app, KeyCode::Char('a'));
        assert_eq!(app.session.answer(1), Some("20"));

        handle_input(&mut app, KeyCode::Char('j')); // question 2
        handle_input(&mut app, KeyCode::Char('3'));
        assert_eq!(app.session.answer(2), Some("50"));
    }

    #[test]
    fn reset_flow_from_the_results_screen() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Tab);
        handle_input(&mut app, KeyCode::Char('a'));
        fill_and_submit(&mut app);

        handle_input(&mut app, KeyCode::Char('r'));
        assert!(app.session.reset_confirmation_pending());

        handle_input(&mut app, KeyCode::Char('n'));
        assert!(!app.session.reset_confirmation_pending());
        assert!(app.session.submitted());

        handle_input(&mut app, KeyCode::Char('r'));
        handle_input(&mut app, KeyCode::Char('y'));
        assert!(!app.session.submitted());
        assert_eq!(app.session.name(), "");
        assert_eq!(app.session.progress().answered, 0);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Tab);
        assert!(handle_input(&mut app, KeyCode::Char('q')));

        let mut app = self::app();
        assert!(handle_input(&mut app, KeyCode::Esc));

        let mut app = self::app();
        fill_and_submit(&mut app);
        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn modal_swallows_unrelated_keys() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('A'));
        handle_input(&mut app, KeyCode::Tab);
        handle_input(&mut app, KeyCode::Char('r'));
        assert!(app.session.reset_confirmation_pending());

        assert!(!handle_input(&mut app, KeyCode::Char('q')));
        assert!(app.session.reset_confirmation_pending());
        assert_eq!(app.session.name(), "A");
    }
}
