pub mod app;
pub mod csv_processor;
pub mod labeling;
pub mod state;
pub mod translation;
pub mod utils;

pub use app::{ask_translation_preference, run_labeling, sampling_rng};
pub use csv_processor::{LabelWriter, SampleLoader, SourceRow};
pub use labeling::{Choice, Console, Label, LabelRecord, LabelingSession, SessionSummary, Terminal};
pub use state::LabelStore;
pub use translation::{TranslationClient, Translator, TRANSLATION_FAILED};
pub use utils::{AppConfig, LabelerError, Result};
