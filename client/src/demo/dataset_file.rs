//! Loading an alternate demo fixture from disk.

use std::ffi::OsString;
use std::io;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};
use demo_data::{DatasetError, DemoDataset};
use tracing::info;

/// Failure to load a fixture document.
#[derive(Debug, thiserror::Error)]
pub enum DatasetLoadError {
    /// File could not be read.
    #[error("failed to read demo dataset {path}: {source}")]
    Read {
        /// Requested path.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// File was read but is not a valid fixture document.
    #[error(transparent)]
    Invalid(#[from] DatasetError),
}

/// Read and parse the fixture document at `path`.
///
/// # Errors
///
/// [`DatasetLoadError::Read`] for I/O failures and
/// [`DatasetLoadError::Invalid`] for malformed documents.
pub fn load_dataset(path: &Path) -> Result<DemoDataset, DatasetLoadError> {
    let contents = read_file(path).map_err(|source| DatasetLoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let dataset = DemoDataset::from_json(&contents)?;
    info!(
        path = %path.display(),
        users = dataset.users().len(),
        posts = dataset.post_count(),
        "loaded demo dataset"
    );
    Ok(dataset)
}

fn read_file(path: &Path) -> io::Result<String> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name: OsString = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path must name a file"))?
        .to_os_string();
    let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
    directory.read_to_string(Path::new(&file_name))
}
