// tests/integration_tests/extraction_test.rs
use super::common::{
    create_config_file, create_test_file, create_test_workbook, setup_test_directory,
};
use anyhow::Result;
use wct::{ExtractionRequest, WordCountError, load_config, process_file};

#[test]
fn test_plain_text_extraction() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let request = ExtractionRequest::new(temp_dir.path().join("plain.txt"));

    assert_eq!(process_file(&request, None)?, 9);
    Ok(())
}

#[test]
fn test_plain_text_extraction_with_config() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let config_path = create_config_file(
        temp_dir.path(),
        &["<p>", "</p>", "<em>", "</em>"],
        &[",", "!"],
    )?;
    let config = load_config(&config_path)?;
    let request = ExtractionRequest::new(temp_dir.path().join("tagged.txt"));

    assert_eq!(process_file(&request, Some(&config))?, 3);
    Ok(())
}

#[test]
fn test_csv_column_extraction() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let csv = temp_dir.path().join("people.csv");

    let bio = ExtractionRequest::new(&csv).with_column("bio");
    assert_eq!(process_file(&bio, None)?, 5, "Bob's short row is skipped");

    let notes = ExtractionRequest::new(&csv).with_column("notes");
    assert_eq!(process_file(&notes, None)?, 1);
    Ok(())
}

#[test]
fn test_csv_single_row_example() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let csv = create_test_file(temp_dir.path(), "bio.csv", "name,bio\nAnn,Loves cats\n")?;

    let request = ExtractionRequest::new(csv).with_column("bio");
    assert_eq!(process_file(&request, None)?, 2);
    Ok(())
}

#[test]
fn test_csv_unknown_column() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let request = ExtractionRequest::new(temp_dir.path().join("people.csv")).with_column("age");

    assert!(matches!(
        process_file(&request, None),
        Err(WordCountError::CsvColumnNotFound { .. })
    ));
    Ok(())
}

#[test]
fn test_spreadsheet_needs_selectors() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let xls = create_test_file(temp_dir.path(), "book.xls", "")?;

    let request = ExtractionRequest::new(&xls).with_column("bio");
    assert!(matches!(
        process_file(&request, None),
        Err(WordCountError::MissingSheetOrColumn)
    ));

    let request = ExtractionRequest::new(&xls).with_sheet("Sheet1").with_column("bio");
    assert!(matches!(
        process_file(&request, None),
        Err(WordCountError::WorkbookOpen(_))
    ));
    Ok(())
}

#[test]
fn test_spreadsheet_column_extraction() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let xls = create_test_workbook(temp_dir.path(), "notes.xls")?;
    let config_path = create_config_file(temp_dir.path(), &["<b>", "</b>"], &["!"])?;
    let config = load_config(&config_path)?;

    let request = ExtractionRequest::new(&xls).with_sheet("Notes").with_column("text");
    assert_eq!(process_file(&request, None)?, 3, "row 2 has no text cell");
    assert_eq!(process_file(&request, Some(&config))?, 2);
    Ok(())
}

#[test]
fn test_spreadsheet_lookup_failures() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let xls = create_test_workbook(temp_dir.path(), "notes.xls")?;

    let missing_sheet = ExtractionRequest::new(&xls).with_sheet("Other").with_column("text");
    assert!(matches!(
        process_file(&missing_sheet, None),
        Err(WordCountError::SheetRead { .. })
    ));

    let empty_sheet = ExtractionRequest::new(&xls).with_sheet("Empty").with_column("text");
    assert!(matches!(
        process_file(&empty_sheet, None),
        Err(WordCountError::SheetEmpty { .. })
    ));

    let missing_column = ExtractionRequest::new(&xls).with_sheet("Notes").with_column("body");
    assert!(matches!(
        process_file(&missing_column, None),
        Err(WordCountError::SheetColumnNotFound { .. })
    ));
    Ok(())
}

#[test]
fn test_csv_with_latin1_bytes() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let csv = temp_dir.path().join("latin1.csv");
    std::fs::write(&csv, b"name,bio\nAnn,caf\xe9 au lait\n")?;

    let request = ExtractionRequest::new(&csv).with_column("bio");
    assert_eq!(process_file(&request, None)?, 3);
    Ok(())
}

#[test]
fn test_unsupported_suffixes() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    for name in ["report.docx", "book.xlsx", "notes.TXT"] {
        let request = ExtractionRequest::new(temp_dir.path().join(name));
        assert!(
            matches!(process_file(&request, None), Err(WordCountError::UnsupportedFileType)),
            "{name} should be unsupported"
        );
    }
    Ok(())
}
