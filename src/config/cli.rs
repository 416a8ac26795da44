use crate::domain::model::Registry;
use crate::domain::ports::Storage;
use crate::utils::error::{ConverterError, Result};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Registry persisted as a flat JSON object, e.g. `{ "salt": 2.16 }`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn storage_error(&self, source: std::io::Error) -> ConverterError {
        ConverterError::StorageError {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Registry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No database at {}, starting empty", self.path.display());
                return Ok(Registry::new());
            }
            Err(e) => return Err(self.storage_error(e)),
        };

        serde_json::from_str(&content).map_err(|source| ConverterError::CorruptStorage {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// Writes a sibling `.tmp` file and renames it over the database so a
    /// crash mid-write leaves the previous contents intact.
    fn save(&self, registry: &Registry) -> Result<()> {
        let mut data = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
        registry.serialize(&mut serializer)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
            }
        }

        let temp = self.temp_path();
        fs::write(&temp, &data).map_err(|e| self.storage_error(e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                tracing::warn!("Could not remove {}: {}", temp.display(), cleanup);
            }
            return Err(self.storage_error(e));
        }
        Ok(())
    }
}
