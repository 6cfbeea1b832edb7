//! Assertion "File Count"

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;

use crate::behavior::{Assertion, FromParameters};
use crate::common::{Error, Result};
use crate::descriptor::Parameters;

/// Waits for `after`, then expects exactly `file_count` entries in `in_directory`
///
/// `after` is optional and defaults to zero. `file_count` and `in_directory`
/// are mandatory.
#[derive(Debug)]
pub struct FileCountAssertion {
    after: Duration,
    file_count: u64,
    in_directory: PathBuf,
}

impl FileCountAssertion {
    pub fn after(&self) -> Duration {
        self.after
    }

    pub fn file_count(&self) -> u64 {
        self.file_count
    }

    pub fn in_directory(&self) -> &Path {
        &self.in_directory
    }
}

fn illegal(parameter: &str) -> Error {
    Error::IllegalParameter(format!("Illegal value for assertion parameter {parameter}."))
}

/// Parse a duration of the form `<integer>s` into signed seconds
///
/// Whitespace anywhere in the value is ignored. Other units are rejected.
fn parse_seconds(value: &str) -> Result<i64> {
    let compact: String = value.split_whitespace().collect();
    compact
        .strip_suffix(['s', 'S'])
        .and_then(|digits| digits.parse::<i64>().ok())
        .ok_or_else(|| illegal("after"))
}

impl FromParameters for FileCountAssertion {
    fn from_parameters(params: &Parameters) -> Result<Self> {
        let after = match params.get::<String>("after") {
            Ok(value) => parse_seconds(&value)?,
            Err(Error::MissingParameter { .. }) => 0,
            Err(e) => return Err(e),
        };
        let file_count: i64 = params.get("file_count")?;
        let in_directory: String = params.get("in_directory")?;

        let after = u64::try_from(after).map_err(|_| illegal("after"))?;
        let file_count = u64::try_from(file_count).map_err(|_| illegal("file_count"))?;
        let in_directory = PathBuf::from(in_directory);
        if !in_directory.is_dir() {
            return Err(illegal("in_directory"));
        }

        Ok(Self {
            after: Duration::from_secs(after),
            file_count,
            in_directory,
        })
    }
}

impl Assertion for FileCountAssertion {
    fn name(&self) -> &'static str {
        "FileCountAssertion"
    }

    fn check(&self) -> Result<bool> {
        info!(
            "FileCountAssertion: sleeping {}s, expecting {} files in \"{}\"",
            self.after.as_secs(),
            self.file_count,
            self.in_directory.display()
        );
        std::thread::sleep(self.after);

        let failed = |e: std::io::Error| Error::execution_failed("Checking FileCountAssertion failed.", e);
        let mut entries = 0u64;
        for entry in std::fs::read_dir(&self.in_directory).map_err(failed)? {
            entry.map_err(failed)?;
            entries += 1;
        }

        Ok(entries == self.file_count)
    }
}
