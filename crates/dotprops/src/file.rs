//! JSON config files.

use crate::error::{PropsError, Result};
use crate::properties::Properties;
use std::fs::File;
use std::io::BufReader;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Properties read from a file, remembering where they came from.
///
/// Derefs to [`Properties`], so every accessor is available directly:
///
/// ```no_run
/// use dotprops::{path, ConfigFile};
///
/// let config = ConfigFile::open("config.json")?;
/// let host = config.get_string_or("localhost", path!["server.host"]);
/// # Ok::<(), dotprops::PropsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigFile {
    properties: Properties,
    file_name: PathBuf,
}

impl ConfigFile {
    /// Read and decode the JSON file at `path`.
    ///
    /// # Errors
    ///
    /// - [`PropsError::Io`] if the file cannot be opened
    /// - [`PropsError::Json`] if its contents are not a JSON document
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PropsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let properties = Properties::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), "loaded config file");
        Ok(Self {
            properties,
            file_name: path.to_path_buf(),
        })
    }

    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    /// Change the recorded file name. The loaded properties are untouched.
    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) {
        self.file_name = path.into();
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn into_properties(self) -> Properties {
        self.properties
    }
}

impl Deref for ConfigFile {
    type Target = Properties;

    fn deref(&self) -> &Properties {
        &self.properties
    }
}
