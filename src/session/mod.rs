//! Quiz session state machine.

mod encouragement;
mod session;

pub use encouragement::encouragement_message;
pub use session::{Feedback, Progress, ResetOutcome, Session, SubmitOutcome};
