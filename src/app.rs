use crate::csv_processor::{LabelWriter, SampleLoader};
use crate::labeling::{prompt_yes_no, LabelingSession, SessionSummary, Terminal};
use crate::state::LabelStore;
use crate::translation::{TranslationClient, Translator};
use crate::utils::{AppConfig, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const TRANSLATION_QUESTION: &str =
    "Do you want to enable live English translation using Google Translate?";
pub const TRANSLATION_PROMPT: &str = "Type 'y' for yes or 'n' for no: ";

pub fn ask_translation_preference<T: Terminal + ?Sized>(terminal: &mut T) -> Result<bool> {
    terminal.show(TRANSLATION_QUESTION)?;
    prompt_yes_no(terminal, TRANSLATION_PROMPT)
}

pub fn sampling_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

pub fn run_labeling<T, G>(
    config: &AppConfig,
    terminal: &mut T,
    translate: bool,
    rng: &mut G,
) -> Result<SessionSummary>
where
    T: Terminal + ?Sized,
    G: Rng + ?Sized,
{
    terminal.show("Launching labeling tool...")?;

    let loader = SampleLoader::new(
        &config.input.path,
        &config.input.id_column,
        &config.input.text_column,
    )
    .with_chunk_size(config.input.chunk_size);
    let sample = loader.load_sample(config.sampling.sample_size, rng)?;

    let store = LabelStore::load(&config.output.path)?;

    let client = if translate {
        Some(TranslationClient::new(&config.translation)?)
    } else {
        None
    };
    let translator = client.as_ref().map(|c| c as &dyn Translator);

    let writer = LabelWriter::open_append(&config.output.path)?;
    let summary = LabelingSession::new(&mut *terminal, writer, store, translator).run(&sample)?;

    terminal.show(&format!(
        "Done! Labeled entries saved to: {}",
        config.output.path.display()
    ))?;

    Ok(summary)
}
