//! CLI command implementations.
//!
//! Available commands:
//! - **calc**: run one module calculator
//! - **calculators**: list calculators and whether configuration hides them
//! - **risk**: aggregate module losses into an operational risk summary
//! - **project**: four-scenario profit projection
//! - **benchmarks**: list industries, show form defaults, export or replace the table
//! - **init**: write a default `.clarity.toml`

pub mod benchmarks;
pub mod calc;
pub mod init;
pub mod project;
pub mod risk;

pub use benchmarks::{export_benchmarks, list_industries, show_defaults, update_benchmarks};
pub use calc::{calculate_module, list_calculators, CalcConfig};
pub use init::init_config;
pub use project::{project_scenarios, ProjectConfig};
pub use risk::{assess_risk, AssessRiskConfig};

use crate::benchmarks::CsvBenchmarkRepository;
use crate::calculators::CalculatorRegistry;
use crate::config::ClarityConfig;
use crate::formatting::FormattingConfig;
use crate::output::OutputFormat;
use std::path::PathBuf;

/// Settings shared by every command, resolved once in `main`.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: ClarityConfig,
    pub benchmarks_path: PathBuf,
    pub formatting: FormattingConfig,
}

impl CommandContext {
    /// `benchmarks_override` wins over the configured table path.
    pub fn new(
        config: ClarityConfig,
        benchmarks_override: Option<PathBuf>,
        formatting: FormattingConfig,
    ) -> Self {
        let benchmarks_path = benchmarks_override.unwrap_or_else(|| config.benchmarks_path());
        Self {
            config,
            benchmarks_path,
            formatting,
        }
    }

    pub fn repository(&self) -> CsvBenchmarkRepository {
        CsvBenchmarkRepository::new(&self.benchmarks_path)
    }

    /// Standard calculators minus those hidden in `[calculators]`.
    pub fn registry(&self) -> CalculatorRegistry {
        let mut registry = CalculatorRegistry::standard();
        for kind in self.config.hidden_calculators() {
            registry.hide(kind);
        }
        registry
    }

    /// Explicit flag, then the configured default, then terminal.
    pub fn resolve_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        if let Some(format) = flag {
            return format;
        }
        match self.config.default_format() {
            Some(name) => OutputFormat::parse(name).unwrap_or_else(|| {
                log::warn!("Unknown default_format '{}'. Using terminal.", name);
                OutputFormat::Terminal
            }),
            None => OutputFormat::Terminal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::CalculatorKind;
    use crate::config::parse_and_validate_config;

    fn context_with(toml: &str) -> CommandContext {
        let config = parse_and_validate_config(toml).unwrap();
        CommandContext::new(config, None, FormattingConfig::plain())
    }

    #[test]
    fn format_flag_beats_config() {
        let context = context_with("[output]\ndefault_format = \"markdown\"\n");
        assert_eq!(
            context.resolve_format(Some(OutputFormat::Json)),
            OutputFormat::Json
        );
        assert_eq!(context.resolve_format(None), OutputFormat::Markdown);
    }

    #[test]
    fn unknown_configured_format_falls_back_to_terminal() {
        let context = context_with("[output]\ndefault_format = \"html\"\n");
        assert_eq!(context.resolve_format(None), OutputFormat::Terminal);
    }

    #[test]
    fn registry_leaves_out_hidden_calculators() {
        let context = context_with("[calculators]\nhidden = [\"leadership-drag\"]\n");
        let registry = context.registry();
        assert!(!registry.contains(CalculatorKind::LeadershipDrag));
        assert!(registry.contains(CalculatorKind::PayrollWaste));

        let context = context_with("");
        assert_eq!(context.registry().kinds().count(), CalculatorKind::ALL.len());
    }

    #[test]
    fn benchmarks_override_wins() {
        let config = ClarityConfig::default();
        let context = CommandContext::new(
            config,
            Some(PathBuf::from("elsewhere.csv")),
            FormattingConfig::plain(),
        );
        assert_eq!(context.benchmarks_path, PathBuf::from("elsewhere.csv"));
    }
}
