use crate::crawler::{CrawlRecord, RecordSink};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// The append-only scratch file that hands records from the worker to the
/// monitor and finalizer. Exactly one writer per crawl; readers see the file
/// mid-write and must tolerate an unterminated final line.
#[derive(Debug, Clone)]
pub struct SharedOutput {
    path: PathBuf,
}

impl SharedOutput {
    /// Creates an empty output file at a freshly generated unique path under
    /// `dir`.
    pub fn create_in(dir: &Path) -> io::Result<Self> {
        let path = dir.join(format!("crawl_{}.jsonl", Uuid::new_v4()));
        File::create(&path)?;
        Ok(Self { path })
    }

    /// Wraps an existing path without touching the filesystem.
    pub fn attach(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses every complete record currently in the file. Data after the
    /// last newline is a record still being written and is ignored, as are
    /// complete lines that fail to parse.
    pub fn read_records(&self) -> io::Result<Vec<CrawlRecord>> {
        let raw = std::fs::read(&self.path)?;
        Ok(parse_records(&String::from_utf8_lossy(&raw)))
    }

    /// Removes the file. Removing an already-absent path is a no-op.
    pub fn delete(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

fn parse_records(raw: &str) -> Vec<CrawlRecord> {
    let mut records = Vec::new();
    for line in raw.split_inclusive('\n') {
        let Some(line) = line.strip_suffix('\n') else {
            break;
        };
        let line = line.trim_end_matches('\r').trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<CrawlRecord>(line) {
            Ok(record) => records.push(record),
            Err(e) => debug!(error = %e, "skipping unparseable record line"),
        }
    }
    records
}

/// Worker-side appender: one JSON line per record, flushed immediately so
/// concurrent monitor reads observe it.
pub struct SharedOutputSink {
    file: File,
}

impl SharedOutputSink {
    pub fn open(output: &SharedOutput) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(output.path())?;
        Ok(Self { file })
    }
}

impl RecordSink for SharedOutputSink {
    fn emit(&mut self, record: &CrawlRecord) -> io::Result<()> {
        let line = serde_json::to_string(record).map_err(io::Error::other)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn create_in_makes_an_empty_file_at_a_fresh_path() {
        let dir = tempdir().unwrap();
        let first = SharedOutput::create_in(dir.path()).unwrap();
        let second = SharedOutput::create_in(dir.path()).unwrap();
        assert_ne!(first.path(), second.path());
        assert_eq!(std::fs::metadata(first.path()).unwrap().len(), 0);
        assert!(first.read_records().unwrap().is_empty());
    }

    #[test]
    fn sink_appends_lines_the_reader_round_trips() {
        let dir = tempdir().unwrap();
        let output = SharedOutput::create_in(dir.path()).unwrap();
        let mut sink = SharedOutputSink::open(&output).unwrap();
        sink.emit(&CrawlRecord::new("https://example.test/", 200))
            .unwrap();
        sink.emit(&CrawlRecord::new("https://example.test/missing", 404))
            .unwrap();

        let records = output.read_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url, "https://example.test/");
        assert_eq!(records[1].status, 404);
    }

    #[test]
    fn truncated_final_line_is_ignored() {
        let dir = tempdir().unwrap();
        let output = SharedOutput::create_in(dir.path()).unwrap();
        let complete = "{\"url\":\"https://example.test/\",\"status\":200}\n\
                        {\"url\":\"https://example.test/about\",\"status\":200}\n";
        let truncated = format!("{complete}{{\"url\":\"https://example.test/mis");
        std::fs::write(output.path(), &truncated).unwrap();

        let with_partial = output.read_records().unwrap();
        std::fs::write(output.path(), complete).unwrap();
        let without_partial = output.read_records().unwrap();

        assert_eq!(with_partial.len(), 2);
        assert_eq!(with_partial.len(), without_partial.len());
        for (lhs, rhs) in with_partial.iter().zip(&without_partial) {
            assert_eq!(lhs.url, rhs.url);
            assert_eq!(lhs.status, rhs.status);
        }
    }

    #[test]
    fn unparseable_interior_line_is_skipped() {
        let dir = tempdir().unwrap();
        let output = SharedOutput::create_in(dir.path()).unwrap();
        let content = "{\"url\":\"https://example.test/\",\"status\":200}\n\
                       not json at all\n\
                       {\"url\":\"https://example.test/about\",\"status\":301}\n";
        std::fs::write(output.path(), content).unwrap();
        let records = output.read_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].status, 301);
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = tempdir().unwrap();
        let output = SharedOutput::create_in(dir.path()).unwrap();
        output.delete().unwrap();
        output.delete().unwrap();
        assert!(!output.path().exists());
    }

    #[test]
    fn reading_a_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let output = SharedOutput::attach(dir.path().join("never-created.jsonl"));
        let err = output.read_records().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
