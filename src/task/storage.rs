//! Task file persistence - one record per line

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::StorageError;
use super::store::TaskStore;

/// Default persistence file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "tasks.txt";

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append the file's tasks to `store` and return how many were read.
    ///
    /// A missing file loads nothing. On a read error the tasks parsed so
    /// far stay in the store.
    pub fn load_into(&self, store: &mut TaskStore) -> Result<usize, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No task file at {}, starting empty", self.path.display());
                return Ok(0);
            }
            Err(e) => return Err(self.read_error(e)),
        };

        let mut loaded = 0;
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| self.read_error(e))?;
            if store.push_record(&line) {
                loaded += 1;
            }
        }

        info!("Loaded {} tasks from {}", loaded, self.path.display());
        Ok(loaded)
    }

    /// Overwrite the file with every task in `store`, in order.
    ///
    /// The file is truncated first; a failure partway leaves it incomplete.
    pub fn save(&self, store: &TaskStore) -> Result<usize, StorageError> {
        let file = File::create(&self.path).map_err(|e| self.write_error(e))?;
        let mut writer = BufWriter::new(file);

        let records = store.serialize_all();
        for record in &records {
            writeln!(writer, "{}", record).map_err(|e| self.write_error(e))?;
        }
        writer.flush().map_err(|e| self.write_error(e))?;

        info!("Saved {} tasks to {}", records.len(), self.path.display());
        Ok(records.len())
    }

    fn read_error(&self, source: io::Error) -> StorageError {
        StorageError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
