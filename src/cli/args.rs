//! Command-line argument parsing for the preview binary.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

use crate::ui::LayoutContext;

/// Usage text printed by `--help` and on invalid arguments.
pub const USAGE: &str = "\
Usage: sku-selector [--width N] [--height N] [--sku ID] <scenario.json>

Renders the variation selector described by a scenario file.

Options:
  --width N     Terminal width to lay out for (default 80)
  --height N    Terminal height to lay out for (default 24)
  --sku ID      Report an external sku change and print the resulting intents
  -V, --version Print version
  -h, --help    Print this help";

/// Options of a preview run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewArgs {
    pub scenario: PathBuf,
    pub width: u16,
    pub height: u16,
    pub sku_id: Option<String>,
}

impl PreviewArgs {
    pub fn layout(&self) -> LayoutContext {
        LayoutContext::new(self.width, self.height)
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Render a scenario file
    Preview(PreviewArgs),
    /// Arguments could not be parsed
    Invalid(String),
}

fn parse_dimension(flag: &str, value: Option<String>) -> Result<u16, String> {
    let value = value.ok_or_else(|| format!("{} expects a value", flag))?;
    match value.parse::<u16>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(format!("{} expects a positive number, got `{}`", flag, value)),
    }
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over everything else on the line.
///
/// # Examples
///
/// ```
/// use sku_selector::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["sku-selector".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let defaults = LayoutContext::default();
    let mut width = defaults.width;
    let mut height = defaults.height;
    let mut sku_id = None;
    let mut scenario = None;
    let mut error = None;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--width" => match parse_dimension("--width", args.next()) {
                Ok(value) => width = value,
                Err(message) => error = error.or(Some(message)),
            },
            "--height" => match parse_dimension("--height", args.next()) {
                Ok(value) => height = value,
                Err(message) => error = error.or(Some(message)),
            },
            "--sku" => match args.next() {
                Some(value) => sku_id = Some(value),
                None => error = error.or(Some("--sku expects a value".to_string())),
            },
            flag if flag.starts_with('-') => {
                error = error.or(Some(format!("unknown option `{}`", flag)));
            }
            path => {
                if scenario.is_some() {
                    error = error.or(Some(format!("unexpected argument `{}`", path)));
                } else {
                    scenario = Some(PathBuf::from(path));
                }
            }
        }
    }

    if let Some(message) = error {
        return CliCommand::Invalid(message);
    }
    match scenario {
        Some(scenario) => CliCommand::Preview(PreviewArgs {
            scenario,
            width,
            height,
            sku_id,
        }),
        None => CliCommand::Invalid("missing scenario file".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let args: Vec<String> = std::iter::once("sku-selector")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        parse_args(args.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_version_wins_over_scenario() {
        assert_eq!(parse(&["scenario.json", "-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_scenario_with_defaults() {
        assert_eq!(
            parse(&["scenario.json"]),
            CliCommand::Preview(PreviewArgs {
                scenario: PathBuf::from("scenario.json"),
                width: 80,
                height: 24,
                sku_id: None,
            })
        );
    }

    #[test]
    fn test_parse_dimensions_and_sku() {
        let command = parse(&["--width", "50", "--height", "30", "--sku", "sku123", "s.json"]);
        let CliCommand::Preview(args) = command else {
            panic!("expected preview, got {:?}", command);
        };
        assert_eq!(args.width, 50);
        assert_eq!(args.height, 30);
        assert_eq!(args.sku_id.as_deref(), Some("sku123"));
        assert_eq!(args.layout(), LayoutContext::new(50, 30));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Invalid("missing scenario file".to_string()));
    }

    #[test]
    fn test_parse_bad_width() {
        assert!(matches!(parse(&["--width", "wide", "s.json"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--width", "0", "s.json"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["s.json", "--width"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown", "s.json"]),
            CliCommand::Invalid("unknown option `--unknown`".to_string())
        );
    }

    #[test]
    fn test_parse_extra_positional() {
        assert!(matches!(parse(&["a.json", "b.json"]), CliCommand::Invalid(_)));
    }
}
