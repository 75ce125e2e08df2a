//! `pie string` — Print the string stored at a container offset.

use anyhow::Context;
use pie_bytecode::BytecodeImage;
use std::path::Path;

fn read_at(file: &Path, offset: u32) -> anyhow::Result<String> {
    let image = BytecodeImage::from_file(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    let string = image
        .read_string(offset)
        .with_context(|| format!("Failed to read string at offset {}", offset))?;

    Ok(string.to_owned())
}

pub fn execute(file: &Path, offset: u32) -> anyhow::Result<()> {
    println!("{}", read_at(file, offset)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pie_bytecode::{layout, MAGIC, VERSION};
    use std::path::PathBuf;

    fn write_container(dir: &tempfile::TempDir, tail: &[u8]) -> PathBuf {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&VERSION.to_le_bytes());
        bytes.extend_from_slice(&[0; 8]); // reserved export fields
        bytes.extend_from_slice(&(layout::SIZE as u32).to_le_bytes());
        bytes.extend_from_slice(tail);

        let path = dir.path().join("strings.pie");
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_read_at_offset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_container(&dir, b"main\0greet\0");

        assert_eq!(read_at(&path, layout::SIZE as u32).unwrap(), "main");
        assert_eq!(read_at(&path, layout::SIZE as u32 + 5).unwrap(), "greet");
    }

    #[test]
    fn test_read_at_bad_offset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_container(&dir, b"main\0");

        let err = read_at(&path, 1000).unwrap_err();
        assert!(err.to_string().contains("offset 1000"));
    }

    #[test]
    fn test_execute_prints_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_container(&dir, b"main\0");

        assert!(execute(&path, layout::SIZE as u32).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.pie");

        let result = read_at(&path, 0);
        assert!(result.is_err());
    }
}
