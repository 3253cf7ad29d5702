use std::fmt;

use colored::{Color, Colorize};

use crate::config::{API_KEY_VAR, EXAMPLE_KEY};
use crate::error::Error;

pub const ANSI_RESET: &str = "\x1b[0m";

/// Escape sequence that switches the foreground to `color`, for writers that
/// cannot go through `Colorize`.
pub fn ansi_fg(color: Color) -> String {
    format!("\x1b[{}m", color.to_fg_str())
}

/// Presentation settings, resolved once from the flags and passed to every
/// print call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub color: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(no_color: bool, stdout_is_terminal: bool, quiet: bool) -> Self {
        Self {
            color: !no_color && stdout_is_terminal,
            quiet,
        }
    }

    pub fn paint(&self, text: impl fmt::Display, color: Color) -> String {
        if self.color {
            text.to_string().color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn status_line(&self, args: fmt::Arguments<'_>) -> Option<String> {
        if self.quiet {
            None
        } else {
            Some(self.paint(format!("[+] {}", args), Color::Blue))
        }
    }

    pub fn status(&self, args: fmt::Arguments<'_>) {
        if let Some(line) = self.status_line(args) {
            eprintln!("{}", line);
        }
    }

    pub fn error_line(&self, message: impl fmt::Display) -> String {
        self.paint(format!("[!] {}", message), Color::Red)
    }

    /// Lines printed to stderr for a fatal or reported error.
    pub fn diagnostic(&self, err: &Error) -> Vec<String> {
        match err {
            Error::MissingApiKey { dotfile } => {
                let export = format!("export {}={}", API_KEY_VAR, EXAMPLE_KEY);
                vec![
                    self.error_line(format_args!("ERROR: {}", err)),
                    String::new(),
                    self.paint(format_args!("    Example: {}", export), Color::Blue),
                    String::new(),
                    self.paint(
                        "    To keep it between sessions, add the above command to your shell's dotfile like so:",
                        Color::Blue,
                    ),
                    self.paint(
                        format_args!("    echo '{}' >> {}", export, dotfile.display()),
                        Color::Blue,
                    ),
                ]
            }
            Error::Usage => vec![
                err.to_string(),
                "Run with -h, --help for full usage details.".to_string(),
            ],
            _ => vec![self.error_line(err)],
        }
    }

    pub fn report(&self, err: &Error) {
        for line in self.diagnostic(err) {
            eprintln!("{}", line);
        }
    }
}

#[macro_export]
macro_rules! status {
    ($output:expr, $($arg:tt)*) => {
        $output.status(format_args!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_color_disabled_by_flag() {
        assert!(!Output::new(true, true, false).color);
    }

    #[test]
    fn test_color_disabled_when_piped() {
        assert!(!Output::new(false, false, false).color);
        assert!(Output::new(false, true, false).color);
    }

    #[test]
    fn test_paint_plain_without_color() {
        let output = Output::default();
        assert_eq!(output.paint("text", Color::Red), "text");
    }

    #[test]
    fn test_paint_wraps_ansi_codes() {
        colored::control::set_override(true);
        let output = Output {
            color: true,
            quiet: false,
        };
        assert_eq!(output.paint("text", Color::Red), "\x1b[31mtext\x1b[0m");
    }

    #[test]
    fn test_status_suppressed_when_quiet() {
        let output = Output {
            color: false,
            quiet: true,
        };
        assert!(output.status_line(format_args!("Reading")).is_none());

        let output = Output::default();
        assert_eq!(
            output.status_line(format_args!("Reading {}", "x")).as_deref(),
            Some("[+] Reading x")
        );
    }

    #[test]
    fn test_missing_key_diagnostic_mentions_dotfile() {
        let output = Output::default();
        let err = Error::MissingApiKey {
            dotfile: PathBuf::from("/home/user/.zshrc"),
        };
        let lines = output.diagnostic(&err);

        assert!(lines[0].starts_with("[!] ERROR: A valid API key"));
        assert!(lines.iter().any(|l| l.contains("export HASHMOB_KEY=")));
        assert!(lines.iter().any(|l| l.ends_with(">> /home/user/.zshrc")));
    }

    #[test]
    fn test_usage_diagnostic() {
        let output = Output::default();
        assert_eq!(
            output.diagnostic(&Error::Usage),
            vec![
                "Usage: hashmob [-q] [-n] <hash input>",
                "Run with -h, --help for full usage details."
            ]
        );
    }

    #[test]
    fn test_ansi_fg_matches_colorize() {
        colored::control::set_override(true);
        assert_eq!(
            format!("{}text{}", ansi_fg(Color::Green), ANSI_RESET),
            "text".green().to_string()
        );
    }

    #[test]
    fn test_generic_diagnostic_is_prefixed() {
        let output = Output::default();
        assert_eq!(output.diagnostic(&Error::NoResults), vec!["[!] No results :("]);
    }
}
