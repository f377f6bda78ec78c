//! Display conventions for clarity output.
//!
//! Terminal styling (colour and emoji detection) lives here alongside the
//! number formatting shared by every calculator: currency with thousands
//! separators, one-decimal percentages, and the `$N/A` placeholder used in
//! reports.

mod numbers;

pub use numbers::{
    format_currency, format_currency_cents, format_dollars, format_per_month, format_percent,
    format_plain, group_thousands, round_to, round_whole, CURRENCY,
};

use colored::{ColoredString, Colorize};
use std::env;
use std::io::IsTerminal;

/// Terminal styling switches, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: bool,
    pub emoji: bool,
}

impl FormattingConfig {
    /// No colour, no emoji.
    pub fn plain() -> Self {
        Self {
            color: false,
            emoji: false,
        }
    }

    /// Styling for the current process and stdout.
    pub fn from_env() -> Self {
        Self::detect(|key| env::var(key).ok(), std::io::stdout().is_terminal())
    }

    /// Colour follows `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`; emoji need
    /// an interactive terminal with a UTF-8 locale.
    fn detect(var: impl Fn(&str) -> Option<String>, interactive: bool) -> Self {
        let capable = interactive && var("TERM").as_deref() != Some("dumb");

        let color = if var("CLICOLOR_FORCE").as_deref() == Some("1") {
            true
        } else if var("NO_COLOR").is_some() || var("CLICOLOR").as_deref() == Some("0") {
            false
        } else {
            capable
        };

        // First non-empty of LC_ALL, LC_CTYPE, LANG decides the charset
        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .into_iter()
            .filter_map(&var)
            .find(|value| !value.is_empty())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let utf8 = locale.contains("utf-8") || locale.contains("utf8");

        Self {
            color,
            emoji: capable && utf8,
        }
    }
}

pub trait OutputFormatter {
    fn success(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn error(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    fn emoji(&self, emoji: &str, fallback: &str) -> String;
    fn bold(&self, text: &str) -> String;
    fn dim(&self, text: &str) -> String;
}

pub struct StyledFormatter {
    config: FormattingConfig,
}

impl StyledFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color);
        Self { config }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.config.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for StyledFormatter {
    fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan().bold())
    }

    fn emoji(&self, emoji: &str, fallback: &str) -> String {
        let chosen = if self.config.emoji { emoji } else { fallback };
        chosen.to_string()
    }

    fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

/// Unstyled output for files and `--plain`.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn emoji(&self, _emoji: &str, fallback: &str) -> String {
        fallback.to_string()
    }

    fn bold(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}
