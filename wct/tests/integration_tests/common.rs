// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn create_config_file(dir: &Path, ignore_tags: &[&str], remove_chars: &[&str]) -> Result<PathBuf> {
    let content = serde_json::json!({
        "ignore_tags": ignore_tags,
        "remove_chars": remove_chars,
    });
    create_test_file(dir, "config.json", &content.to_string())
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "plain.txt", "The quick brown fox\njumps over\tthe lazy dog")?;

    create_test_file(
        temp_dir.path(),
        "tagged.txt",
        "<p>Hello</p> <em>there</em>, world!",
    )?;

    create_test_file(
        temp_dir.path(),
        "people.csv",
        "name,bio,notes\nAnn,Loves cats,\nBob\nCy,\"Plays the drums\",loud\n",
    )?;

    create_test_file(temp_dir.path(), "report.docx", "Not really a document")?;

    Ok(temp_dir)
}

pub fn create_test_workbook(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut workbook = rust_xlsxwriter::Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Notes")?;
    sheet.write_string(0, 0, "id")?;
    sheet.write_string(0, 1, "text")?;
    sheet.write_string(1, 0, "1")?;
    sheet.write_string(1, 1, "<b>Bold</b>move !")?;
    sheet.write_string(2, 0, "2")?;
    sheet.write_string(3, 0, "3")?;
    sheet.write_string(3, 1, "quiet")?;

    workbook.add_worksheet().set_name("Empty")?;
    workbook.save(&path)?;
    Ok(path)
}
