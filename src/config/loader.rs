use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{ClarityConfig, RiskConfig, CONFIG_FILE_NAME};
use crate::calculators::CalculatorKind;
use crate::errors::{ClarityError, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string, replacing invalid risk settings with defaults
pub fn parse_and_validate_config(contents: &str) -> Result<ClarityConfig> {
    let mut config = toml::from_str::<ClarityConfig>(contents).map_err(|e| {
        ClarityError::config(format!("failed to parse {}: {}", CONFIG_FILE_NAME, e), None)
    })?;

    if let Some(ref risk) = config.risk {
        if let Err(e) = risk.validate() {
            log::warn!("Invalid risk settings: {}. Using defaults.", e);
            config.risk = Some(RiskConfig::default());
        }
    }

    if let Some(ref mut calculators) = config.calculators {
        calculators
            .hidden
            .retain(|name| match name.parse::<CalculatorKind>() {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("Ignoring hidden calculator: {}", e);
                    false
                }
            });
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<ClarityConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(mut config) => {
            log::debug!("Loaded config from {}", config_path.display());
            config.source = Some(config_path.to_path_buf());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Missing files are the normal case while walking upward
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory and its ancestors, nearest first, up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Nearest `.clarity.toml` at or above `start`, or defaults
pub fn discover_config(start: PathBuf) -> ClarityConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ClarityConfig::default()
        })
}

/// Discover from the current directory
pub fn load_config() -> ClarityConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ClarityConfig::default()
        }
    }
}

/// Load an explicitly named config file; every failure is an error
pub fn load_config_from(path: &Path) -> Result<ClarityConfig> {
    let contents = read_config_file(path)
        .map_err(|e| ClarityError::from_io_error(e, Some(path.to_path_buf())))?;
    let mut config = parse_and_validate_config(&contents).map_err(|e| match e {
        ClarityError::Config { message, .. } => {
            ClarityError::config(message, Some(path.to_path_buf()))
        }
        other => other,
    })?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::core::DEFAULT_EBITDA_MARGIN;
    use tempfile::TempDir;

    #[test]
    fn ancestors_are_bounded() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }

    #[test]
    fn invalid_margin_falls_back() {
        let config = parse_and_validate_config("[risk]\ndefault_ebitda_margin = 250.0\n").unwrap();
        assert_eq!(
            config.risk.unwrap().default_ebitda_margin,
            DEFAULT_EBITDA_MARGIN
        );
    }

    #[test]
    fn unknown_hidden_calculators_are_dropped() {
        let config =
            parse_and_validate_config("[calculators]\nhidden = [\"payroll\", \"customer-churn\"]\n")
                .unwrap();
        assert_eq!(
            config.calculators.unwrap().hidden,
            vec!["customer-churn".to_string()]
        );
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = parse_and_validate_config("[risk\n").unwrap_err();
        assert!(matches!(err, ClarityError::Config { .. }));
    }

    #[test]
    fn discovers_config_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("one").join("two");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[risk]\ndefault_ebitda_margin = 15.0\n",
        )
        .unwrap();

        let config = discover_config(nested);
        assert_eq!(config.risk_settings().default_ebitda_margin, 15.0);
        assert_eq!(
            config.source.as_deref(),
            Some(temp.path().join(CONFIG_FILE_NAME).as_path())
        );
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let err = load_config_from(Path::new("/nonexistent/.clarity.toml")).unwrap_err();
        assert!(matches!(err, ClarityError::Io { .. }));
    }
}
