use std::fs;
use std::fs::OpenOptions;
use std::io;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use log::debug;
use log::warn;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use veloplot_records::RawRecord;

use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

pub(crate) struct DataClient {
    client: Client,
}

impl DataClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }

    /// Fetches the race records with a single request. Nothing is retried.
    pub fn records(&self, url: &str) -> Result<Vec<RawRecord>> {
        let response = self.get(url)?;
        let body = response.text()?;
        debug!("received {bytes} bytes from `{url}`", bytes = body.len());

        let records = serde_json::from_str(&body)?;
        Ok(records)
    }

    /// Stores the response body in `path` as is.
    pub fn download(&self, url: &str, path: &Path) -> Result<u64> {
        let mut response = self.get(url)?;
        store(&mut response, path)
    }

    fn get(&self, url: &str) -> Result<Response> {
        debug!("GET {url}");
        let response = self.client.get(url).send()?;
        let status_code = response.status();

        if status_code.is_success() {
            return Ok(response);
        }

        let message = response.text()?;
        Err(FetchError::Response {
            status_code,
            message,
        })
    }
}

/// Copies `reader` into the file at `path`. A partially written file is
/// removed when the copy fails.
fn store<R: Read>(reader: &mut R, path: &Path) -> Result<u64> {
    let mut writer = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    match io::copy(reader, &mut writer) {
        Ok(bytes) => Ok(bytes),
        Err(error) => {
            drop(writer);
            if let Err(remove_error) = fs::remove_file(path) {
                warn!(
                    "could not remove the partial download `{}`: {remove_error}",
                    path.display()
                );
            }
            Err(error.into())
        }
    }
}
