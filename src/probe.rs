use std::fs;
use std::io;
use std::path::Path;

use crate::error::{AppError, AppResult};

pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Reads the whole file as UTF-8. Relative paths resolve against the
/// working directory. Any path that cannot be opened and read is reported as
/// `NotFound`; only non-UTF-8 contents surface as an io error.
pub fn read_file(path: impl AsRef<Path>) -> AppResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::InvalidData => AppError::Io(err),
        _ => AppError::NotFound(path.to_path_buf()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_does_not_exist() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(!file_exists(dir.path().join("nope.json")));
    }

    #[test]
    fn reads_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello").expect("write");

        assert!(file_exists(&path));
        assert_eq!(read_file(&path).expect("read"), "hello");
    }

    #[test]
    fn reading_missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.txt");

        match read_file(&path) {
            Err(AppError::NotFound(reported)) => assert_eq!(reported, path),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn path_below_a_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("file.txt");
        fs::write(&file, "{}").expect("write");
        let path = file.join("child");

        match read_file(&path) {
            Err(AppError::NotFound(reported)) => assert_eq!(reported, path),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn directory_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(read_file(dir.path()), Err(AppError::NotFound(_))));
    }

    #[test]
    fn non_utf8_contents_are_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("binary");
        fs::write(&path, [0xff, 0xfe, 0x00]).expect("write");

        assert!(matches!(read_file(&path), Err(AppError::Io(_))));
    }
}
