// Storage accessor: reads and writes raw bytes under
// `base_dir/<category>/<filename>`. Each operation is a single attempt;
// a missing file is recognised from the I/O error rather than from a
// separate existence check.

use crate::category::{resolve_category, Category};
use log::debug;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Error: File '{filename}' does not exist in '{category}/'.")]
    NotFound { filename: String, category: Category },

    #[error("Error: '{filename}' is not a valid file name.")]
    InvalidName { filename: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// Whether the error is a handled, user-facing condition rather than
    /// a filesystem failure.
    pub fn is_handled(&self) -> bool {
        !matches!(self, StorageError::Io { .. })
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// A file addressed by its category and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub category: Category,
    pub filename: String,
    pub path: PathBuf,
}

/// Categorized file store rooted at a base directory.
#[derive(Debug, Clone)]
pub struct Storage {
    base_dir: PathBuf,
}

impl Storage {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Storage {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Compute where `filename` lives without touching the filesystem.
    pub fn locate(&self, filename: &str) -> StorageResult<StoredFile> {
        validate_name(filename)?;
        let category = resolve_category(filename);
        Ok(StoredFile {
            category,
            filename: filename.to_string(),
            path: self.base_dir.join(category.as_str()).join(filename),
        })
    }

    /// Create `base_dir/<category>` (and parents) if it is missing.
    pub fn ensure_category_folder(&self, category: Category) -> StorageResult<PathBuf> {
        let dir = self.base_dir.join(category.as_str());
        fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(dir)
    }

    /// Write `content` to the file, replacing whatever was there.
    pub fn write_file(&self, filename: &str, content: &[u8]) -> StorageResult<StoredFile> {
        let file = self.locate(filename)?;
        self.ensure_category_folder(file.category)?;
        debug!("writing {} bytes to {}", content.len(), file.path.display());
        fs::write(&file.path, content).map_err(|source| StorageError::Io {
            path: file.path.clone(),
            source,
        })?;
        Ok(file)
    }

    pub fn read_file(&self, filename: &str) -> StorageResult<Vec<u8>> {
        let file = self.locate(filename)?;
        debug!("reading {}", file.path.display());
        fs::read(&file.path).map_err(|e| interpret(e, file))
    }

    pub fn delete_file(&self, filename: &str) -> StorageResult<StoredFile> {
        let file = self.locate(filename)?;
        debug!("removing {}", file.path.display());
        match fs::remove_file(&file.path) {
            Ok(()) => Ok(file),
            Err(e) => Err(interpret(e, file)),
        }
    }
}

fn interpret(err: io::Error, file: StoredFile) -> StorageError {
    if err.kind() == io::ErrorKind::NotFound {
        StorageError::NotFound {
            filename: file.filename,
            category: file.category,
        }
    } else {
        StorageError::Io {
            path: file.path,
            source: err,
        }
    }
}

// A name must be exactly one normal path component so that every
// operation stays inside its category folder.
fn validate_name(filename: &str) -> StorageResult<()> {
    let mut components = Path::new(filename).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || filename.contains('/') || (cfg!(windows) && filename.contains('\\')) {
        return Err(StorageError::InvalidName {
            filename: filename.to_string(),
        });
    }
    Ok(())
}
