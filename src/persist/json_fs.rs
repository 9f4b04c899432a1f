//! JSON file record store
//!
//! Each resource is one file, `<base_dir>/<resource>.<extension>`, holding a
//! JSON array of record objects.

use crate::entity::Record;
use crate::persist::error::{PersistError, PersistResult};
use crate::persist::interface::RecordStore;
use crate::types::{CrafterConfig, DEFAULT_FILE_EXTENSION};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON file record store
#[derive(Debug, Clone)]
pub struct JsonFs {
    base_dir: PathBuf,
    extension: String,
}

impl JsonFs {
    /// Create a store rooted at `base_dir` using the default extension
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            extension: DEFAULT_FILE_EXTENSION.to_string(),
        }
    }

    /// Create a store from configuration
    pub fn from_config(config: &CrafterConfig) -> Self {
        Self::new(&config.data_dir).with_extension(config.file_extension.clone())
    }

    /// Set the file extension (without the leading dot)
    ///
    /// An empty extension stores each resource under its bare name.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File path backing `resource`
    pub fn path_for(&self, resource: &str) -> PersistResult<PathBuf> {
        if resource.is_empty()
            || resource.contains(['/', '\\'])
            || resource == "."
            || resource == ".."
        {
            return Err(PersistError::InvalidResource(resource.to_string()));
        }
        if self.extension.is_empty() {
            return Ok(self.base_dir.join(resource));
        }
        Ok(self
            .base_dir
            .join(format!("{}.{}", resource, self.extension)))
    }

    fn parse_records(path: &Path, content: &str) -> PersistResult<Vec<Record>> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let document: serde_json::Value = serde_json::from_str(content)?;
        let serde_json::Value::Array(entries) = document else {
            return Err(PersistError::Format(format!(
                "{}: expected an array of records",
                path.display()
            )));
        };

        entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| match entry {
                serde_json::Value::Object(record) => Ok(record),
                other => Err(PersistError::Format(format!(
                    "{}: entry {} is not a record: {}",
                    path.display(),
                    idx,
                    other
                ))),
            })
            .collect()
    }
}

impl RecordStore for JsonFs {
    fn read(&self, resource: &str) -> PersistResult<Vec<Record>> {
        let path = self.path_for(resource)?;
        if path.is_dir() {
            return Err(PersistError::InvalidResource(format!(
                "{} is a directory",
                path.display()
            )));
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(PersistError::NotFound(path.display().to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        let records = Self::parse_records(&path, &content)?;
        debug!(path = %path.display(), count = records.len(), "read records");
        Ok(records)
    }

    fn write(&self, resource: &str, records: &[Record]) -> PersistResult<()> {
        let path = self.path_for(resource)?;
        if path.is_dir() {
            return Err(PersistError::InvalidResource(format!(
                "{} is a directory",
                path.display()
            )));
        }
        fs::create_dir_all(&self.base_dir)?;

        let content = serde_json::to_string_pretty(records)?;
        // Write beside the target, then swap it in.
        let mut tmp_path = path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &path)?;

        debug!(path = %path.display(), count = records.len(), "wrote records");
        Ok(())
    }
}
