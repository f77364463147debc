use std::fs;
use std::path::Path;

use crate::result::Result;

/// Read a file to a string.
pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write a file, creating any missing parent directories first.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Button/Button.tsx");

        write_file(&path, "export const Button = null;").unwrap();

        assert_eq!(read_file(&path).unwrap(), "export const Button = null;");
    }

    #[test]
    fn test_read_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_file(&dir.path().join("missing.ts"));
        assert!(matches!(result, Err(crate::ThemeloomError::Io(_))));
    }
}
