//! Trigger "File Created"

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::behavior::{FromParameters, Trigger};
use crate::common::{Error, Result};
use crate::descriptor::Parameters;

/// Creates an empty file `with_name` inside `in_directory`
#[derive(Debug)]
pub struct FileCreatedTrigger {
    with_name: String,
    in_directory: PathBuf,
}

impl FileCreatedTrigger {
    pub fn with_name(&self) -> &str {
        &self.with_name
    }

    pub fn in_directory(&self) -> &Path {
        &self.in_directory
    }

    fn target(&self) -> PathBuf {
        self.in_directory.join(&self.with_name)
    }

    fn verify(&self) -> Result<()> {
        if !self.in_directory.is_dir() {
            return Err(Error::IllegalParameter(
                "Illegal value for trigger parameter in_directory.".to_string(),
            ));
        }
        if self.target().exists() {
            return Err(Error::IllegalParameter(
                "Illegal value for trigger parameters with_name and in_directory: File already exists."
                    .to_string(),
            ));
        }
        Ok(())
    }
}

impl FromParameters for FileCreatedTrigger {
    fn from_parameters(params: &Parameters) -> Result<Self> {
        let with_name: String = params.get("with_name")?;
        let in_directory: String = params.get("in_directory")?;

        let trigger = Self {
            with_name,
            in_directory: PathBuf::from(in_directory),
        };
        trigger.verify()?;
        Ok(trigger)
    }
}

impl Trigger for FileCreatedTrigger {
    fn name(&self) -> &'static str {
        "FileCreatedTrigger"
    }

    fn execute(&self) -> Result<()> {
        let target = self.target();
        info!("FileCreatedTrigger: creating new file \"{}\"", target.display());

        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .map_err(|e| Error::execution_failed("FileCreatedTrigger could not be executed.", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Mapping;
    use tempfile::TempDir;

    fn params(with_name: &str, dir: &Path) -> Parameters {
        let yaml = format!("with_name: {with_name}\nin_directory: {}\n", dir.display());
        Parameters::new(serde_yaml::from_str::<Mapping>(&yaml).unwrap())
    }

    #[test]
    fn test_create_from_parameters() {
        let dir = TempDir::new().unwrap();
        let trigger = FileCreatedTrigger::from_parameters(&params("test.foo", dir.path())).unwrap();
        assert_eq!(trigger.with_name(), "test.foo");
        assert_eq!(trigger.in_directory(), dir.path());
    }

    #[test]
    fn test_execute_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let trigger = FileCreatedTrigger::from_parameters(&params("test.foo", dir.path())).unwrap();
        trigger.execute().unwrap();

        let created = dir.path().join("test.foo");
        assert!(created.is_file());
        assert_eq!(std::fs::metadata(created).unwrap().len(), 0);
    }

    #[test]
    fn test_missing_parameters() {
        let p = Parameters::new(serde_yaml::from_str::<Mapping>("in_directory: x\n").unwrap());
        let err = FileCreatedTrigger::from_parameters(&p).unwrap_err();
        assert_eq!(err.to_string(), "Parameter with_name is mandatory, but missing.");

        let p = Parameters::new(serde_yaml::from_str::<Mapping>("with_name: a\n").unwrap());
        let err = FileCreatedTrigger::from_parameters(&p).unwrap_err();
        assert_eq!(err.to_string(), "Parameter in_directory is mandatory, but missing.");
    }

    #[test]
    fn test_wrong_types() {
        let p = Parameters::new(
            serde_yaml::from_str::<Mapping>("with_name: 1\nin_directory: x\n").unwrap(),
        );
        let err = FileCreatedTrigger::from_parameters(&p).unwrap_err();
        assert_eq!(err.to_string(), "Illegal value for parameter with_name.");

        let p = Parameters::new(
            serde_yaml::from_str::<Mapping>("with_name: a\nin_directory: [x]\n").unwrap(),
        );
        let err = FileCreatedTrigger::from_parameters(&p).unwrap_err();
        assert_eq!(err.to_string(), "Illegal value for parameter in_directory.");
    }

    #[test]
    fn test_directory_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = FileCreatedTrigger::from_parameters(&params("a", &missing)).unwrap_err();
        assert_eq!(err.to_string(), "Illegal value for trigger parameter in_directory.");
    }

    #[test]
    fn test_existing_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("test.foo"), "").unwrap();
        let err = FileCreatedTrigger::from_parameters(&params("test.foo", dir.path())).unwrap_err();
        assert!(matches!(err, Error::IllegalParameter(_)));
        assert_eq!(
            err.to_string(),
            "Illegal value for trigger parameters with_name and in_directory: File already exists."
        );
    }

    #[test]
    fn test_execute_fails_when_file_appears_after_construction() {
        let dir = TempDir::new().unwrap();
        let trigger = FileCreatedTrigger::from_parameters(&params("late.foo", dir.path())).unwrap();
        std::fs::write(dir.path().join("late.foo"), "").unwrap();

        let err = trigger.execute().unwrap_err();
        assert!(matches!(err, Error::BehaviorExecutionFailed { .. }));
        assert_eq!(err.to_string(), "FileCreatedTrigger could not be executed.");
    }
}
