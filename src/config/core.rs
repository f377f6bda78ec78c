use crate::calculators::CalculatorKind;
use crate::risk::RiskSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".clarity.toml";
pub const DEFAULT_BENCHMARKS_PATH: &str = "benchmarks/industry_benchmarks.csv";
pub const DEFAULT_EBITDA_MARGIN: f64 = 20.0;

/// Written by `clarity init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# Clarity Configuration

[benchmarks]
# Industry benchmark table, relative to this file
path = "benchmarks/industry_benchmarks.csv"

[risk]
# Percent of revenue assumed as EBITDA when a request omits it
default_ebitda_margin = 20.0

[output]
default_format = "terminal"

[calculators]
# Calculators that `clarity calc` will not run, e.g. ["leadership-drag"]
hidden = []
"#;

/// Root configuration structure for clarity
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClarityConfig {
    /// Benchmark table location
    #[serde(default)]
    pub benchmarks: Option<BenchmarksConfig>,

    /// Operational risk defaults
    #[serde(default)]
    pub risk: Option<RiskConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Calculator visibility
    #[serde(default)]
    pub calculators: Option<CalculatorsConfig>,

    /// File this configuration was read from.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarksConfig {
    #[serde(default = "default_benchmarks_path")]
    pub path: PathBuf,
}

impl Default for BenchmarksConfig {
    fn default() -> Self {
        Self {
            path: default_benchmarks_path(),
        }
    }
}

fn default_benchmarks_path() -> PathBuf {
    PathBuf::from(DEFAULT_BENCHMARKS_PATH)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskConfig {
    #[serde(default = "default_ebitda_margin")]
    pub default_ebitda_margin: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            default_ebitda_margin: DEFAULT_EBITDA_MARGIN,
        }
    }
}

fn default_ebitda_margin() -> f64 {
    DEFAULT_EBITDA_MARGIN
}

impl RiskConfig {
    pub fn validate(&self) -> Result<(), String> {
        let margin = self.default_ebitda_margin;
        if !margin.is_finite() || margin <= 0.0 || margin > 100.0 {
            return Err(format!(
                "default_ebitda_margin must be in (0, 100], got {}",
                margin
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CalculatorsConfig {
    /// Calculator slugs, as accepted by `clarity calc`.
    #[serde(default)]
    pub hidden: Vec<String>,
}

impl CalculatorsConfig {
    /// Hidden calculators; unrecognised names are skipped.
    pub fn hidden_kinds(&self) -> Vec<CalculatorKind> {
        self.hidden
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect()
    }
}

impl ClarityConfig {
    /// Benchmark CSV path; relative paths resolve against the config file's
    /// directory.
    pub fn benchmarks_path(&self) -> PathBuf {
        let path = self
            .benchmarks
            .as_ref()
            .map(|b| b.path.clone())
            .unwrap_or_else(default_benchmarks_path);
        match self.source.as_deref().and_then(Path::parent) {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        }
    }

    pub fn risk_settings(&self) -> RiskSettings {
        RiskSettings {
            default_ebitda_margin: self
                .risk
                .as_ref()
                .map_or(DEFAULT_EBITDA_MARGIN, |r| r.default_ebitda_margin),
        }
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output.as_ref()?.default_format.as_deref()
    }

    pub fn hidden_calculators(&self) -> Vec<CalculatorKind> {
        self.calculators
            .as_ref()
            .map(CalculatorsConfig::hidden_kinds)
            .unwrap_or_default()
    }
}
