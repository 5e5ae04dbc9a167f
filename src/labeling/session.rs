use crate::csv_processor::{LabelWriter, SourceRow};
use crate::labeling::console::{prompt_choice, Terminal, CHOICE_HELP};
use crate::labeling::label::{Choice, LabelRecord};
use crate::state::LabelStore;
use crate::translation::Translator;
use crate::utils::Result;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Ready,
    Displayed,
    AwaitingInput,
    Recorded,
    Terminated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub labeled: usize,
    pub skipped: usize,
    pub remaining: usize,
    pub quit: bool,
}

pub struct LabelingSession<'a, T: Terminal + ?Sized> {
    terminal: &'a mut T,
    writer: LabelWriter,
    store: LabelStore,
    translator: Option<&'a dyn Translator>,
    status: SessionStatus,
}

impl<'a, T: Terminal + ?Sized> LabelingSession<'a, T> {
    pub fn new(
        terminal: &'a mut T,
        writer: LabelWriter,
        store: LabelStore,
        translator: Option<&'a dyn Translator>,
    ) -> Self {
        Self {
            terminal,
            writer,
            store,
            translator,
            status: SessionStatus::Ready,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn store(&self) -> &LabelStore {
        &self.store
    }

    pub fn run(&mut self, rows: &[SourceRow]) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        for (position, row) in rows.iter().enumerate() {
            self.status = SessionStatus::Ready;

            if self.store.contains(&row.identifier) {
                debug!(identifier = %row.identifier, "Already labeled, skipping");
                summary.skipped += 1;
                continue;
            }

            self.display(row)?;

            self.status = SessionStatus::AwaitingInput;
            let label = match prompt_choice(&mut *self.terminal)? {
                Choice::Quit => {
                    self.status = SessionStatus::Terminated;
                    summary.quit = true;
                    summary.remaining = rows.len() - position;
                    self.terminal.show("Exiting, progress saved.")?;
                    break;
                }
                Choice::Label(label) => label,
            };

            let record = LabelRecord {
                identifier: row.identifier.clone(),
                excerpt: row.text.clone(),
                label,
            };
            self.writer.append(&record)?;
            debug!(identifier = %record.identifier, label = %label, "Label recorded");

            self.store.insert(record);
            self.status = SessionStatus::Recorded;
            summary.labeled += 1;
        }

        if !summary.quit {
            self.status = SessionStatus::Terminated;
        }

        info!(
            labeled = summary.labeled,
            skipped = summary.skipped,
            remaining = summary.remaining,
            quit = summary.quit,
            output = %self.writer.path().display(),
            "Labeling session finished"
        );

        Ok(summary)
    }

    fn display(&mut self, row: &SourceRow) -> Result<()> {
        self.terminal.show("")?;
        self.terminal.show(&format!("ID {}", row.identifier))?;
        self.terminal.show(&format!("Original: {}", row.text))?;

        if let Some(translator) = self.translator {
            let translated = translator.translate(&row.text);
            self.terminal.show(&format!("English:  {}", translated))?;
        }

        self.terminal.show(CHOICE_HELP)?;
        self.status = SessionStatus::Displayed;
        Ok(())
    }
}
