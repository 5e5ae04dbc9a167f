pub mod console;
pub mod label;
pub mod session;

pub use console::{prompt_choice, prompt_yes_no, Console, Terminal};
pub use label::{Choice, Label, LabelRecord, LabelRow, OUTPUT_HEADERS};
pub use session::{LabelingSession, SessionStatus, SessionSummary};
