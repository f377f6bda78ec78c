//! Panic hook that prints a structured crash report.
//!
//! The report names the command being run and the innermost tracing span,
//! which together usually identify the calculator and input involved.

use std::panic::PanicHookInfo;
use std::sync::OnceLock;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const WIDTH: usize = 66;

static COMMAND: OnceLock<String> = OnceLock::new();

/// Record the running command for crash reports. Only the first call sticks.
pub fn set_command(name: impl Into<String>) {
    let _ = COMMAND.set(name.into());
}

pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let rule = "═".repeat(WIDTH + 12);
    eprintln!();
    eprintln!("{}", rule);
    eprintln!("  CLARITY CRASH REPORT");
    eprintln!("{}", rule);
    eprintln!("  Version:  {}", VERSION);
    eprintln!("  Platform: {}", std::env::consts::OS);
    eprintln!(
        "  Time:     {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    eprintln!("  Panic:    {}", truncate(&extract_panic_message(info), WIDTH));
    if let Some(location) = info.location() {
        eprintln!(
            "  Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    match COMMAND.get() {
        Some(command) => eprintln!("  Command:  {}", command),
        None => eprintln!("  Command:  (not set - crash occurred during startup)"),
    }
    if let Some(metadata) = Span::current().metadata() {
        eprintln!("  Span:     {}", truncate(metadata.name(), WIDTH));
    }
    eprintln!("{}", rule);

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("  Run with RUST_BACKTRACE=1 for stack trace");
    }
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
