use std::error::Error;
use std::fmt::Display;

use log::SetLoggerError;
use veloplot_vis::error::VisError;

use crate::fetch::error::FetchError;

#[derive(Debug)]
pub(crate) enum CliError {
    Fetch(FetchError),
    Vis(VisError),
    Path(String),
    Logging(SetLoggerError),
}

impl From<FetchError> for CliError {
    fn from(error: FetchError) -> Self {
        CliError::Fetch(error)
    }
}

impl From<VisError> for CliError {
    fn from(error: VisError) -> Self {
        CliError::Vis(error)
    }
}

impl From<SetLoggerError> for CliError {
    fn from(error: SetLoggerError) -> Self {
        CliError::Logging(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Fetch(error) => write!(f, "{cli_error} {error}"),
            CliError::Vis(error) => write!(f, "{cli_error} {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
            CliError::Logging(error) => {
                write!(f, "{cli_error} setting up the logger failed: {error}")
            }
        }
    }
}

impl Error for CliError {}
