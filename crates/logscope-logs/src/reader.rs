//! Whole-file log reading

use logscope_core::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use tracing::debug;

/// Open log file ready for transfer
#[derive(Debug)]
pub struct LogFile {
    pub file: File,
    /// Name of the file on disk, used for the download attachment
    pub file_name: String,
    pub len: u64,
}

/// Reader for a single resolved log path
pub struct LogReader {
    path: PathBuf,
}

impl LogReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read every line of the file in order, without line terminators.
    ///
    /// Returns `Ok(None)` when the file does not exist, including when it was
    /// removed after being resolved.
    pub fn read_lines(&self) -> Result<Option<Vec<String>>> {
        let Some(file) = self.open_file()? else {
            return Ok(None);
        };

        let reader = BufReader::new(file);
        let lines = reader.lines().collect::<io::Result<Vec<String>>>()?;
        debug!("Read {} lines from {}", lines.len(), self.path.display());
        Ok(Some(lines))
    }

    /// Open the file for streaming to a client
    pub fn open(&self) -> Result<Option<LogFile>> {
        let Some(file) = self.open_file()? else {
            return Ok(None);
        };

        let len = file.metadata()?.len();
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Some(LogFile { file, file_name, len }))
    }

    fn open_file(&self) -> Result<Option<File>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Log file missing: {}", self.path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_lines_nonexistent_file() {
        let reader = LogReader::new(PathBuf::from("/nonexistent/vm1_2024-06-01.log"));
        assert!(reader.read_lines().unwrap().is_none());
        assert!(reader.open().unwrap().is_none());
    }

    #[test]
    fn test_read_lines_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vm1_2024-06-01.log");
        {
            let mut file = File::create(&path).unwrap();
            for i in 1..=5 {
                writeln!(file, "Line {}", i).unwrap();
            }
        }

        let lines = LogReader::new(path).read_lines().unwrap().unwrap();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Line 1");
        assert_eq!(lines[4], "Line 5");
    }

    #[test]
    fn test_read_lines_strips_crlf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("win.log");
        std::fs::write(&path, "a\r\nb\r\nc").unwrap();

        let lines = LogReader::new(path).read_lines().unwrap().unwrap();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_read_lines_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.log");
        File::create(&path).unwrap();

        let lines = LogReader::new(path).read_lines().unwrap().unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_read_lines_invalid_utf8_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.log");
        std::fs::write(&path, [0xff, 0xfe, b'\n']).unwrap();

        assert!(LogReader::new(path).read_lines().is_err());
    }

    #[test]
    fn test_read_directory_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(LogReader::new(dir.path().to_path_buf()).read_lines().is_err());
    }

    #[test]
    fn test_open_keeps_file_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prod-vm1_2024-06-01.log");
        std::fs::write(&path, "Hello, world!\n").unwrap();

        let log = LogReader::new(path).open().unwrap().unwrap();
        assert_eq!(log.file_name, "prod-vm1_2024-06-01.log");
        assert_eq!(log.len, 14);
    }
}
