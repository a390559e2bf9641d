use std::env;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use log::LevelFilter;

use crate::error::CliError;

pub(crate) const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/FreeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Specify the level of the log messages written to the stderr.
    #[arg(short, long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub(crate) log_level: LogLevel,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the race records as a scatter plot page.
    Render(RenderArgs),
    /// Download the race records and store them as a JSON file.
    Fetch(FetchArgs),
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Specify the URL from where to fetch the race records.
    #[arg(short, long, default_value = DEFAULT_DATA_URL, conflicts_with = "file")]
    pub(crate) url: String,

    /// Read the race records from a local JSON file instead of fetching them.
    #[arg(short, long, value_parser(parse_file))]
    pub(crate) file: Option<PathBuf>,

    /// Specify the path where the generated output will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,

    /// Specify the title of the page.
    #[arg(short, long)]
    pub(crate) title: Option<String>,

    /// Specify the HTTP request timeout, in seconds.
    #[arg(long, default_value_t = 30)]
    pub(crate) timeout: u64,
}

#[derive(Args)]
pub(crate) struct FetchArgs {
    /// Specify the URL from where to fetch the race records.
    #[arg(short, long, default_value = DEFAULT_DATA_URL)]
    pub(crate) url: String,

    /// Specify the directory where the race records will be stored.
    /// If the path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) path: Option<PathBuf>,

    /// Specify the HTTP request timeout, in seconds.
    #[arg(long, default_value_t = 30)]
    pub(crate) timeout: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

fn parse_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.is_file() {
        return Err(format!(
            "The `{}` path must point to an existing file.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults() {
        let cli = Cli::try_parse_from(["veloplot", "render"]).unwrap();

        assert_eq!(LogLevel::Info, cli.log_level);
        let Commands::Render(args) = cli.command else {
            panic!("expected the render command");
        };
        assert_eq!(DEFAULT_DATA_URL, args.url);
        assert_eq!(None, args.file);
        assert_eq!(None, args.output_path);
        assert_eq!(30, args.timeout);
    }

    #[test]
    fn global_log_level_after_the_subcommand() {
        let cli = Cli::try_parse_from(["veloplot", "render", "--log-level", "debug"]).unwrap();

        assert_eq!(LogLevel::Debug, cli.log_level);
        assert_eq!(LevelFilter::Debug, LevelFilter::from(cli.log_level));
    }

    #[test]
    fn url_conflicts_with_file() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let result = Cli::try_parse_from([
            "veloplot",
            "render",
            "--url",
            "http://localhost/data.json",
            "--file",
            manifest,
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn output_path_must_exist() {
        let result = Cli::try_parse_from([
            "veloplot",
            "render",
            "--output-path",
            "/this/path/does/not/exist",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn missing_path_defaults_to_the_current_dir() {
        let path: Option<PathBuf> = None;

        assert_eq!(env::current_dir().unwrap(), path.or_current_dir().unwrap());
    }
}
