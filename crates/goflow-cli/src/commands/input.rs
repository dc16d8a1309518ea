//! Loading Go sources from a file or a directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where to read Go sources from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    /// Every regular file directly inside, non-recursive.
    Dir(PathBuf),
}

/// One loaded source file.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read '{}': {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },
}

pub fn load_sources(input: &Input) -> Result<Vec<SourceFile>, InputError> {
    match input {
        Input::File(path) => Ok(vec![load_file(path)?]),
        Input::Dir(dir) => list_dir(dir)?.iter().map(|path| load_file(path)).collect(),
    }
}

fn load_file(path: &Path) -> Result<SourceFile, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceFile {
        path: path.to_path_buf(),
        content,
    })
}

/// Regular files directly inside `dir`, sorted for deterministic output.
pub fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    let read_dir_err = |source| InputError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let file_type = entry.file_type().map_err(read_dir_err)?;
        if file_type.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();

    tracing::debug!(dir = %dir.display(), files = paths.len(), "listed input directory");
    Ok(paths)
}
