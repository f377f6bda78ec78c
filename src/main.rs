use anyhow::Result;
use clap::Parser;
use clarity::cli::{BenchmarkAction, Cli, Commands};
use clarity::commands::{self, AssessRiskConfig, CalcConfig, CommandContext, ProjectConfig};
use clarity::config::{load_config, load_config_from, ClarityConfig};
use clarity::formatting::FormattingConfig;
use clarity::observability::{init_tracing, install_panic_hook, set_command};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbosity);
    install_panic_hook();
    set_command(command_name(&cli.command));

    if let Commands::Init { force } = cli.command {
        return commands::init::init_config(force);
    }

    let config = load_configuration(cli.config.as_deref())?;
    let context = CommandContext::new(
        config,
        cli.benchmarks,
        create_formatting_config(cli.plain),
    );

    match cli.command {
        Commands::Calc {
            module,
            input,
            format,
            output,
        } => commands::calculate_module(
            CalcConfig {
                module,
                input,
                format,
                output,
            },
            &context,
        ),
        Commands::Risk {
            input,
            format,
            output,
        } => commands::assess_risk(
            AssessRiskConfig {
                input,
                format,
                output,
            },
            &context,
        ),
        Commands::Project {
            input,
            format,
            output,
        } => commands::project_scenarios(
            ProjectConfig {
                input,
                format,
                output,
            },
            &context,
        ),
        Commands::Calculators => commands::list_calculators(&context),
        Commands::Industries => commands::list_industries(&context),
        Commands::Defaults { industry } => commands::show_defaults(&industry, &context),
        Commands::Benchmarks { action } => match action {
            BenchmarkAction::Export { output } => {
                commands::export_benchmarks(output.as_deref(), &context)
            }
            BenchmarkAction::Update { input } => commands::update_benchmarks(&input, &context),
        },
        Commands::Init { .. } => Ok(()),
    }
}

fn load_configuration(explicit: Option<&std::path::Path>) -> Result<ClarityConfig> {
    match explicit {
        Some(path) => Ok(load_config_from(path)?),
        None => Ok(load_config()),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Calc { .. } => "calc",
        Commands::Calculators => "calculators",
        Commands::Risk { .. } => "risk",
        Commands::Project { .. } => "project",
        Commands::Industries => "industries",
        Commands::Defaults { .. } => "defaults",
        Commands::Benchmarks { .. } => "benchmarks",
        Commands::Init { .. } => "init",
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
