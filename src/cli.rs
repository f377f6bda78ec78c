use crate::calculators::CalculatorKind;
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clarity")]
#[command(about = "Operational cost and profit-risk calculators for small businesses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .clarity.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Benchmark CSV, overriding the configured path
    #[arg(long, global = true)]
    pub benchmarks: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colors and emoji in terminal output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one module calculator against a JSON input
    Calc {
        /// Calculator to run
        #[arg(value_parser = parse_calculator_kind)]
        module: CalculatorKind,

        /// JSON input file, or - for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the calculators and whether configuration hides them
    Calculators,

    /// Aggregate module losses into an operational risk summary
    Risk {
        /// JSON input file, or - for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Project profit under the four improvement scenarios
    Project {
        /// JSON input file, or - for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the industries in the benchmark table
    Industries,

    /// Show suggested form defaults for an industry
    Defaults {
        /// Industry name, exactly as it appears in the table
        industry: String,
    },

    /// Export or replace the benchmark table
    Benchmarks {
        #[command(subcommand)]
        action: BenchmarkAction,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum BenchmarkAction {
    /// Write every row as a JSON array of column/value records
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the table with edited records
    Update {
        /// JSON array of records, or - for stdin
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn parse_calculator_kind(s: &str) -> Result<CalculatorKind, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_calc_command() {
        let cli = Cli::parse_from([
            "clarity",
            "calc",
            "payroll-waste",
            "--input",
            "payroll.json",
            "--format",
            "json",
        ]);

        match cli.command {
            Commands::Calc {
                module,
                input,
                format,
                output,
            } => {
                assert_eq!(module, CalculatorKind::PayrollWaste);
                assert_eq!(input, PathBuf::from("payroll.json"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(output.is_none());
            }
            _ => panic!("Expected Calc command"),
        }
    }

    #[test]
    fn test_cli_input_defaults_to_stdin() {
        let cli = Cli::parse_from(["clarity", "risk"]);

        match cli.command {
            Commands::Risk { input, format, .. } => {
                assert_eq!(input, PathBuf::from("-"));
                assert!(format.is_none());
            }
            _ => panic!("Expected Risk command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "clarity",
            "industries",
            "--benchmarks",
            "table.csv",
            "-vv",
            "--plain",
        ]);

        assert_eq!(cli.benchmarks, Some(PathBuf::from("table.csv")));
        assert_eq!(cli.verbosity, 2);
        assert!(cli.plain);
        assert!(matches!(cli.command, Commands::Industries));
    }

    #[test]
    fn test_unknown_calculator_is_rejected() {
        let result = Cli::try_parse_from(["clarity", "calc", "payroll"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_benchmarks_update() {
        let cli = Cli::parse_from(["clarity", "benchmarks", "update", "--input", "rows.json"]);

        match cli.command {
            Commands::Benchmarks {
                action: BenchmarkAction::Update { input },
            } => assert_eq!(input, PathBuf::from("rows.json")),
            _ => panic!("Expected Benchmarks update"),
        }
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["clarity", "init", "--force"]);

        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }
}
