pub mod numeric;

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .context("Failed to read stdin")?;
        Ok(contents)
    } else {
        read_file(path)
    }
}

/// Parse a JSON document from a file or stdin.
pub fn read_json_input(path: &Path) -> Result<serde_json::Value> {
    let contents = read_input(path)?;
    serde_json::from_str(&contents)
        .with_context(|| format!("{} is not valid JSON", display_source(path)))
}

fn display_source(path: &Path) -> String {
    if path == Path::new("-") {
        "stdin".to_string()
    } else {
        path.display().to_string()
    }
}
