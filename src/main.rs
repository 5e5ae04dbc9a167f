use clap::{ArgAction, Parser};
use dual_use_labeler::utils::DEFAULT_CONFIG_PATH;
use dual_use_labeler::{ask_translation_preference, run_labeling, sampling_rng, AppConfig, Console};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Label a random sample of CSV rows as dual-use, not dual-use or maybe.
#[derive(Parser, Debug)]
#[command(name = "dual-use-labeler", version, about)]
struct Cli {
    /// TOML configuration file; missing means built-in defaults
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Input CSV to sample from
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output CSV that labels are appended to
    #[arg(long)]
    output: Option<PathBuf>,

    #[arg(long)]
    sample_size: Option<usize>,

    #[arg(long)]
    text_column: Option<String>,

    #[arg(long)]
    id_column: Option<String>,

    /// Rows read per chunk while streaming the input
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Seed for a reproducible sample
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    target_lang: Option<String>,

    /// Translation API key
    #[arg(long, env = "TRANSLATE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Enable or disable translation without the startup prompt
    #[arg(long, action = ArgAction::Set, value_parser = clap::builder::BoolishValueParser::new())]
    translate: Option<bool>,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(input) = &self.input {
            config.input.path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(sample_size) = self.sample_size {
            config.sampling.sample_size = sample_size;
        }
        if let Some(text_column) = &self.text_column {
            config.input.text_column = text_column.clone();
        }
        if let Some(id_column) = &self.id_column {
            config.input.id_column = id_column.clone();
        }
        if let Some(chunk_size) = self.chunk_size {
            config.input.chunk_size = chunk_size;
        }
        if self.seed.is_some() {
            config.sampling.seed = self.seed;
        }
        if let Some(target_lang) = &self.target_lang {
            config.translation.target_lang = target_lang.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.translation.api_key = api_key.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(Some(cli.config.as_path()))?;
    cli.apply(&mut config);

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("dual_use_labeler={}", config.logging.level).parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(
        input = %config.input.path.display(),
        output = %config.output.path.display(),
        sample_size = config.sampling.sample_size,
        "Loaded configuration"
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let translate = match cli.translate {
        Some(flag) => flag,
        None => ask_translation_preference(&mut console)?,
    };
    tracing::info!(translate, "Translation preference set");

    let mut rng = sampling_rng(config.sampling.seed);
    let summary = run_labeling(&config, &mut console, translate, &mut rng)?;

    tracing::info!(?summary, "Labeling tool exiting");
    Ok(())
}
