use crate::errors::StorageResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// File access seam. Production code goes through `OsFileIo`; tests use
/// the in-memory mock so persistence logic runs without touching disk.
pub trait FileIo {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write_file(&mut self, path: &Path, data: &[u8]) -> io::Result<()>;
}

/// Real filesystem access.
#[derive(Debug, Default)]
pub struct OsFileIo;

impl FileIo for OsFileIo {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write_file(&mut self, path: &Path, data: &[u8]) -> io::Result<()> {
        std::fs::write(path, data)
    }
}

/// In-memory file store for tests.
#[derive(Debug, Default)]
pub struct MockFileIo {
    pub files: HashMap<PathBuf, Vec<u8>>,
}

impl MockFileIo {
    pub fn new() -> Self {
        MockFileIo::default()
    }
}

impl FileIo for MockFileIo {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn write_file(&mut self, path: &Path, data: &[u8]) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }
}

/// Serialize a value to pretty JSON at `path`.
pub fn save_to_json<T: Serialize>(io: &mut dyn FileIo, value: &T, path: &Path) -> StorageResult<()> {
    let data = serde_json::to_vec_pretty(value)?;
    io.write_file(path, &data)?;
    Ok(())
}

/// Read and deserialize a JSON value from `path`.
pub fn load_from_json<T: DeserializeOwned>(io: &dyn FileIo, path: &Path) -> StorageResult<T> {
    let data = io.read_file(path)?;
    Ok(serde_json::from_slice(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StorageError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_round_trip_through_mock() {
        let mut io = MockFileIo::new();
        let path = Path::new("saves/team.json");
        let value = vec!["Ekans".to_string(), "Pikachu".to_string()];

        save_to_json(&mut io, &value, path).expect("save should work");
        let loaded: Vec<String> = load_from_json(&io, path).expect("load should work");
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let io = MockFileIo::new();
        let err = load_from_json::<Vec<String>>(&io, Path::new("nope.json")).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let mut io = MockFileIo::new();
        io.files
            .insert(PathBuf::from("bad.json"), b"{not json".to_vec());
        let err = load_from_json::<Vec<String>>(&io, Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }
}
