//! Plain text output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Writes each line followed by `\n`.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes `lines` to it.
pub fn write_output(lines: &[String], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_lines(&mut writer, lines)
}

/// Renders lines to a string, one `\n` per line.
pub fn to_text(lines: &[String]) -> String {
    let mut text = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Absolute output paths are kept; relative ones are joined onto `input_dir`.
pub fn resolve_output_path(input_dir: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        input_dir.join(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines() -> Vec<String> {
        vec![
            "alice,01.01.2020 at 10:00:00,hello".to_string(),
            String::new(),
            "The number of records with the username alice = 1".to_string(),
        ]
    }

    #[test]
    fn test_write_lines_to_buffer() {
        let mut buffer = Vec::new();
        write_lines(&mut buffer, &lines()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), to_text(&lines()));
    }

    #[test]
    fn test_to_text_trailing_newline() {
        assert_eq!(
            to_text(&lines()),
            "alice,01.01.2020 at 10:00:00,hello\n\nThe number of records with the username alice = 1\n"
        );
        assert_eq!(to_text(&[]), "");
    }

    #[test]
    fn test_write_output_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        std::fs::write(&path, "old content that is much longer than the new content\n").unwrap();

        write_output(&["new".to_string()], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_write_output_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_output(&lines(), &dir.path().join("nope/out.log")).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let input = Path::new("/data/logs");
        assert_eq!(
            resolve_output_path(input, Path::new("result.txt")),
            PathBuf::from("/data/logs/result.txt")
        );
        assert_eq!(
            resolve_output_path(input, Path::new("/tmp/result.txt")),
            PathBuf::from("/tmp/result.txt")
        );
    }
}
