use std::collections::HashSet;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use dual_use_labeler::labeling::console::CHOICE_PROMPT;
use dual_use_labeler::{
    ask_translation_preference, run_labeling, AppConfig, Console, LabelStore, LabelerError,
};

type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn scripted(input: &str) -> ScriptedConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn config_for(dir: &TempDir, input_body: &str, sample_size: usize) -> AppConfig {
    let input = dir.path().join("bigfile.csv");
    fs::write(&input, input_body).unwrap();

    let mut config = AppConfig::default();
    config.input.path = input;
    config.input.chunk_size = 2;
    config.output.path = dir.path().join("labeled_sample.csv");
    config.sampling.sample_size = sample_size;
    config
}

fn output_ids(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap().to_string())
        .collect()
}

const INPUT_ROWS: &str = "entryid,product,country\nA,centrifuge,DE\nB,toaster,FR\nC,,IT\nD,oscilloscope,US\nE,gyroscope,JP\nF,lathe,CN\n";

#[test]
fn second_run_with_same_sample_never_duplicates_labels() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, INPUT_ROWS, 3);

    let mut first = scripted("1\nq\n");
    let summary = run_labeling(&config, &mut first, false, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(summary.labeled, 1);
    assert!(summary.quit);

    let mut second = scripted("0\nm\n1\n");
    let summary = run_labeling(&config, &mut second, false, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.labeled, 2);
    assert!(!summary.quit);

    let ids = output_ids(&config.output.path);
    assert_eq!(ids.len(), 3);
    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), 3);
    assert!(!ids.contains(&"C".to_string()));

    let store = LabelStore::load(&config.output.path).unwrap();
    assert_eq!(store.len(), 3);
    let first_row = fs::read_to_string(&config.output.path)
        .unwrap()
        .lines()
        .nth(1)
        .unwrap()
        .to_string();
    assert!(first_row.ends_with(",1,0,0"));
}

#[test]
fn previously_labeled_row_is_not_prompted() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, "entryid,product\nA,alpha\nB,beta\n", 2);
    fs::write(
        &config.output.path,
        "entryid,Excerpt,Dual-use,Maybe,No\nA,alpha,0,1,0\n",
    )
    .unwrap();

    let mut console = scripted("1\n");
    let summary = run_labeling(&config, &mut console, false, &mut StdRng::seed_from_u64(11)).unwrap();

    assert_eq!(summary.labeled, 1);
    assert_eq!(summary.skipped, 1);
    let shown = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(shown.matches(CHOICE_PROMPT).count(), 1);
    assert!(shown.contains("ID B"));
    assert!(shown.contains("Done! Labeled entries saved to:"));

    let contents = fs::read_to_string(&config.output.path).unwrap();
    assert_eq!(
        contents,
        "entryid,Excerpt,Dual-use,Maybe,No\nA,alpha,0,1,0\nB,beta,1,0,0\n"
    );
}

#[test]
fn resume_after_hand_edit_without_final_newline_keeps_records_intact() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, "entryid,product\nA,alpha\nB,beta\n", 2);
    fs::write(
        &config.output.path,
        "entryid,Excerpt,Dual-use,Maybe,No\nA,alpha,0,1,0",
    )
    .unwrap();

    let mut console = scripted("1\n");
    let summary = run_labeling(&config, &mut console, false, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(summary.labeled, 1);
    assert_eq!(summary.skipped, 1);

    let store = LabelStore::load(&config.output.path).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.contains("A"));
    assert!(store.contains("B"));
    assert_eq!(
        fs::read_to_string(&config.output.path).unwrap(),
        "entryid,Excerpt,Dual-use,Maybe,No\nA,alpha,0,1,0\nB,beta,1,0,0\n"
    );
}

#[test]
fn corrupt_store_aborts_before_any_prompt() {
    let dir = TempDir::new().unwrap();
    let config = config_for(&dir, INPUT_ROWS, 3);
    fs::write(&config.output.path, "entryid,Excerpt\n\"unterminated,1\n").unwrap();
    let before = fs::read(&config.output.path).unwrap();

    let mut console = scripted("1\n1\n1\n");
    let err = run_labeling(&config, &mut console, false, &mut StdRng::seed_from_u64(0)).unwrap_err();

    assert!(matches!(err, LabelerError::StoreCorruptError { .. }));
    let shown = String::from_utf8(console.into_output()).unwrap();
    assert!(!shown.contains(CHOICE_PROMPT));
    assert_eq!(fs::read(&config.output.path).unwrap(), before);
}

#[test]
fn schema_mismatch_aborts_before_output_is_created() {
    let dir = TempDir::new().unwrap();
    let mut config = config_for(&dir, INPUT_ROWS, 3);
    config.input.text_column = "description".to_string();

    let mut console = scripted("1\n");
    let err = run_labeling(&config, &mut console, false, &mut StdRng::seed_from_u64(0)).unwrap_err();

    match err {
        LabelerError::SchemaError { missing, .. } => assert_eq!(missing, vec!["description"]),
        other => panic!("expected SchemaError, got {other:?}"),
    }
    assert!(!config.output.path.exists());
}

#[test]
fn translation_outage_does_not_block_labeling() {
    let dir = TempDir::new().unwrap();
    let mut config = config_for(&dir, "entryid,product\nA,Zentrifuge\n", 1);
    config.translation.endpoint = "http://127.0.0.1:1/language/translate/v2".to_string();
    config.translation.timeout_seconds = 2;

    let mut console = scripted("y\nm\n");
    let translate = ask_translation_preference(&mut console).unwrap();
    assert!(translate);

    let summary =
        run_labeling(&config, &mut console, translate, &mut StdRng::seed_from_u64(0)).unwrap();

    assert_eq!(summary.labeled, 1);
    let shown = String::from_utf8(console.into_output()).unwrap();
    assert!(shown.contains("English:  [Translation failed]"));
    assert_eq!(output_ids(&config.output.path), vec!["A"]);
}
