use stacks_airdrop::{generate, inspect, PipelineError, RenderMode, TransferCall, BURN_ADDRESS};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ADDR_A: &str = "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ";
const ADDR_B: &str = "SP3FBR2AGK5H9QBDH3EEN6DF8EK8JY7RX8QJ5SVT";

fn setup_input(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("addresses.csv");
    fs::write(&input, content).unwrap();
    (temp_dir, input)
}

fn output_path(dir: &TempDir) -> PathBuf {
    dir.path().join("contracts").join("address-validator.clar")
}

fn transfer_count(path: &Path) -> usize {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| l.trim_start().starts_with("(try! (contract-call?"))
        .count()
}

#[test]
fn test_duplicate_and_burn_yield_single_transfer() {
    let (dir, input) = setup_input(&format!("{ADDR_A}\n{ADDR_A}\n{BURN_ADDRESS}\n"));
    let output = output_path(&dir);

    let generated = generate(&input, RenderMode::Transfer, &TransferCall::default(), &output)
        .unwrap();

    assert_eq!(generated.rendered(), 1);
    assert_eq!(transfer_count(&output), 1);
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains(&format!("'{ADDR_A} none))")));
    assert!(!text.contains(BURN_ADDRESS));
}

#[test]
fn test_contract_address_not_rendered() {
    let contract = format!("{ADDR_B}.some-contract");
    let (dir, input) = setup_input(&format!("{ADDR_A}\n{contract}\n"));
    let output = output_path(&dir);

    generate(&input, RenderMode::Transfer, &TransferCall::default(), &output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(!text.contains("some-contract"));
    assert_eq!(transfer_count(&output), 1);
}

#[test]
fn test_malformed_address_still_rendered() {
    let short = &ADDR_A[..39];
    let (dir, input) = setup_input(&format!("{short}\n{ADDR_B}\n"));
    let output = output_path(&dir);

    let generated =
        generate(&input, RenderMode::Transfer, &TransferCall::default(), &output).unwrap();

    assert_eq!(generated.inspection.format.invalid, vec![short.to_string()]);
    assert_eq!(transfer_count(&output), 2);
}

#[test]
fn test_validation_mode_prints_every_clean_address() {
    let (dir, input) = setup_input(&format!("{ADDR_A}\nSPnotvalid\n{ADDR_A}\n{ADDR_B}\n"));
    let output = output_path(&dir);

    let generated =
        generate(&input, RenderMode::Validation, &TransferCall::default(), &output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.matches("(print '").count(), 3);
    assert_eq!(transfer_count(&output), 0);
    assert!(text.ends_with(";; Total addresses: 3"));

    let format = &generated.inspection.format;
    assert_eq!(format.valid.len(), 2);
    assert_eq!(format.invalid.len(), 1);
    assert_eq!(format.total(), generated.inspection.filter.after_burn);
}

#[test]
fn test_blank_and_missing_lines_are_dropped() {
    let (_dir, input) = setup_input(&format!("{ADDR_A}\n\nNaN\n  \n{ADDR_B}\n"));

    let inspection = inspect(&input).unwrap();

    assert_eq!(inspection.filter.duplicates_removed, 0);
    assert_eq!(inspection.addresses.len(), 2);
}

#[test]
fn test_same_input_same_bytes() {
    let content = format!("{ADDR_B}\n{ADDR_A}\n{ADDR_B}\n");
    let (dir, input) = setup_input(&content);
    let first = dir.path().join("first.clar");
    let second = dir.path().join("second.clar");

    generate(&input, RenderMode::Transfer, &TransferCall::default(), &first).unwrap();
    generate(&input, RenderMode::Transfer, &TransferCall::default(), &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_existing_output_is_overwritten() {
    let (dir, input) = setup_input(&format!("{ADDR_A}\n"));
    let output = output_path(&dir);
    fs::create_dir_all(output.parent().unwrap()).unwrap();
    fs::write(&output, "stale contents").unwrap();

    generate(&input, RenderMode::Transfer, &TransferCall::default(), &output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("(define-public (test-transfers)"));
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = output_path(&dir);

    let err = generate(
        &dir.path().join("missing.csv"),
        RenderMode::Transfer,
        &TransferCall::default(),
        &output,
    )
    .unwrap_err();

    assert!(matches!(err, PipelineError::InputNotFound(_)));
    assert!(!output.exists());
}

#[test]
fn test_multi_column_input_writes_nothing() {
    let (dir, input) = setup_input(&format!("{ADDR_A}\n{ADDR_B},500\n"));
    let output = output_path(&dir);

    let err = generate(&input, RenderMode::Validation, &TransferCall::default(), &output)
        .unwrap_err();

    assert!(matches!(err, PipelineError::MalformedInput { line: 2, .. }));
    assert!(!output.exists());
}

#[test]
fn test_inspection_json_report() {
    let (_dir, input) = setup_input(&format!("{ADDR_A}\n{ADDR_A}\n{ADDR_B}.pool\nSPshort\n"));

    let inspection = inspect(&input).unwrap();
    let json = serde_json::to_value(&inspection).unwrap();

    assert_eq!(json["filter"]["initial"], 4);
    assert_eq!(json["filter"]["duplicates_removed"], 1);
    assert_eq!(json["filter"]["contracts_found"], 1);
    assert_eq!(json["format"]["invalid"][0], "SPshort");
    assert!(json.get("addresses").is_none());
}
