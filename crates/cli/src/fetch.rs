mod client;

pub(crate) mod error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use log::info;
use veloplot_records::RawRecord;

use crate::cli::FetchArgs;
use crate::cli::PathExt;
use crate::error::CliError;
use crate::fetch::client::DataClient;
use crate::fetch::error::Result;

const DATA_FILE_NAME: &str = "cyclist-data.json";

/// Where the race records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    pub(crate) fn load(&self, timeout: Duration) -> Result<Vec<RawRecord>> {
        let records = match self {
            Source::Url(url) => DataClient::new(timeout)?.records(url)?,
            Source::File(path) => read_file(path)?,
        };

        info!("loaded {count} race records from {self}", count = records.len());
        Ok(records)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(url) => write!(f, "`{url}`"),
            Source::File(path) => write!(f, "`{}`", path.display()),
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<RawRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let records = serde_json::from_reader(reader)?;
    Ok(records)
}

pub(crate) fn fetch(args: FetchArgs) -> std::result::Result<(), CliError> {
    let path = args.path.or_current_dir()?.join(DATA_FILE_NAME);

    println!(
        "veloplot fetches the race records from: `{}` and stores them in: `{}`",
        args.url,
        path.display()
    );

    let client = DataClient::new(Duration::from_secs(args.timeout))?;
    let bytes = client.download(&args.url, &path)?;

    info!("stored {bytes} bytes in `{}`", path.display());
    Ok(())
}
