use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("{} already exists", .0.display())]
    Exists(PathBuf),
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write script to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes the rendered script, creating parent directories as needed.
///
/// Without `overwrite` the file is opened with `create_new`, so an existing
/// file is never touched, even one created after the caller looked.
pub fn write_script(path: &Path, bytes: &[u8], overwrite: bool) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options.open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            OutputError::Exists(path.to_path_buf())
        } else {
            write_err(source)
        }
    })?;
    file.write_all(bytes).map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_script, OutputError};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn write_script_creates_missing_directories() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("nested/out/workshop_greeting.sql");
        write_script(&path, b"select 1;\n", false).expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "select 1;\n");
    }

    #[test]
    fn write_script_keeps_existing_file_without_overwrite() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("workshop_greeting.sql");
        fs::write(&path, "old").expect("seed");

        let err = write_script(&path, b"new", false).unwrap_err();
        assert!(matches!(err, OutputError::Exists(_)));
        assert_eq!(fs::read_to_string(&path).expect("read"), "old");
    }

    #[test]
    fn write_script_replaces_shorter_content_with_overwrite() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("workshop_greeting.sql");
        fs::write(&path, "a much longer previous script").expect("seed");

        write_script(&path, b"new", true).expect("write");
        assert_eq!(fs::read_to_string(&path).expect("read"), "new");
    }
}
