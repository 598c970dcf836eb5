//! Thread dump file reader.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::ThreadDump;
use crate::error::Result;

/// A loaded dump together with where and when it came from.
#[derive(Debug, Clone)]
pub struct DumpInfo {
    /// File the dump was read from.
    pub path: PathBuf,
    /// When the file was read.
    pub loaded_at: DateTime<Utc>,
    /// The parsed dump.
    pub dump: ThreadDump,
}

impl DumpInfo {
    /// Stamp a freshly parsed dump with its origin.
    pub fn new(path: PathBuf, dump: ThreadDump) -> Self {
        Self {
            path,
            loaded_at: Utc::now(),
            dump,
        }
    }
}

/// Thread dump reader.
#[derive(Debug)]
pub struct DumpReader;

impl DumpReader {
    /// Read a thread dump file.
    ///
    /// Accepts the JSON layout produced by the JVM's `ThreadMXBean`
    /// regardless of file extension; dumps are commonly saved as `.json`
    /// or `.txt`.
    pub fn read_file(path: &Path) -> Result<DumpInfo> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| crate::error::ThreadlensError::file_open(path.to_path_buf(), e))?;
        let dump: ThreadDump = serde_json::from_str(&raw)?;

        Self::check_thread_ids(&dump);
        tracing::debug!(threads = dump.threads.len(), "parsed thread dump");

        Ok(DumpInfo::new(path.to_path_buf(), dump))
    }

    // Thread ids are unique within a dump; a duplicate usually means a
    // concatenated or hand-edited file.
    fn check_thread_ids(dump: &ThreadDump) {
        let mut seen = HashSet::new();
        for thread in &dump.threads {
            if !seen.insert(thread.thread_id) {
                tracing::warn!(thread_id = thread.thread_id, "duplicate thread id in dump");
            }
        }
    }
}
