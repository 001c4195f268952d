//! Reading source code from a file argument or stdin.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

// Enough for any reasonable snippet; also bounds the prompt built per action.
const MAX_SOURCE_SIZE: usize = 1024 * 1024;

/// Reads the source code to translate, from `path` or from stdin when no
/// path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the input exceeds 1 MiB, or
/// the input is not valid UTF-8.
pub fn read_source(path: Option<&str>) -> Result<String> {
    path.map_or_else(read_stdin, read_file)
}

fn read_file(path: &str) -> Result<String> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

    if metadata.len() as usize > MAX_SOURCE_SIZE {
        bail!(
            "Source file is too large ({:.1} MB, limit is 1 MB): {path}",
            metadata.len() as f64 / 1024.0 / 1024.0
        );
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
}

#[allow(clippy::significant_drop_tightening)]
fn read_stdin() -> Result<String> {
    let mut stdin = io::stdin().lock();
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 8192];

    loop {
        let read = stdin
            .read(&mut chunk)
            .context("Failed to read from stdin")?;
        if read == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..read]);
        if buffer.len() > MAX_SOURCE_SIZE {
            bail!("Input from stdin exceeds the 1 MB limit");
        }
    }

    String::from_utf8(buffer).context("Input is not valid UTF-8")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "print('hi')").unwrap();

        let source = read_source(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(source, "print('hi')");
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_source(Some("/no/such/file.py")).is_err());
    }

    #[test]
    fn test_read_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let source = read_source(Some(file.path().to_str().unwrap())).unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn test_read_file_over_limit() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&vec![b'x'; MAX_SOURCE_SIZE + 1]).unwrap();

        let result = read_source(Some(file.path().to_str().unwrap()));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_read_file_preserves_unicode() {
        let mut file = NamedTempFile::new().unwrap();
        let source = "# коментар\nprint('héllo 🌍')";
        write!(file, "{source}").unwrap();

        assert_eq!(
            read_source(Some(file.path().to_str().unwrap())).unwrap(),
            source
        );
    }
}
