//! Command-line arguments.

use clap::{Parser, ValueEnum};

/// List the projects, repositories and artifacts of a Harbor registry
#[derive(Parser, Debug)]
#[command(name = "harbor-ls")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Registry username
    #[arg(short, long, env = "HARBOR_USER")]
    pub user: String,

    /// Registry password or robot account secret
    #[arg(short, long, env = "HARBOR_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Registry host name, or base URL including the scheme
    #[arg(short, long, env = "HARBOR_REGISTRY")]
    pub registry: String,

    /// Log verbosity
    #[arg(short, long, value_enum, default_value = "warning")]
    pub level: LogLevel,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Number of projects and repositories listed concurrently
    #[arg(short = 'j', long, default_value = "1")]
    pub concurrency: usize,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path prefixes to list, as `project` or `project/repository`
    pub filters: Vec<String>,
}

/// Log verbosity levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Returns the `tracing` filter directive for this level.
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

/// Report format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const BASE: [&str; 7] = ["harbor-ls", "-u", "user", "-p", "pass", "-r", "harbor.example.com"];

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(BASE).unwrap();
        assert_eq!(cli.user, "user");
        assert_eq!(cli.password, "pass");
        assert_eq!(cli.registry, "harbor.example.com");
        assert_eq!(cli.level, LogLevel::Warning);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.concurrency, 1);
        assert!(cli.timeout.is_none());
        assert!(cli.filters.is_empty());
    }

    #[test]
    fn test_filters_and_options() {
        let args = BASE
            .iter()
            .copied()
            .chain(["-f", "json", "-l", "debug", "-j", "4", "--timeout", "30", "p1", "p2/r1"]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.level, LogLevel::Debug);
        assert_eq!(cli.concurrency, 4);
        assert_eq!(cli.timeout, Some(30));
        assert_eq!(cli.filters, vec!["p1", "p2/r1"]);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let args = BASE.iter().copied().chain(["-f", "yaml"]);
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_level_directives() {
        assert_eq!(LogLevel::Warning.directive(), "warn");
        assert_eq!(LogLevel::Critical.directive(), "error");
        assert_eq!(LogLevel::Debug.directive(), "debug");
    }
}
