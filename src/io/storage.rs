use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Name of the task data file inside the data directory
pub const DATA_FILE: &str = "tasks.jsonl";

/// Error type for task persistence
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("could not encode task {id}: {source}")]
    Encode {
        id: u64,
        source: serde_json::Error,
    },
}

/// Persists the full task collection. Loading yields tasks in stored order;
/// saving replaces everything previously stored.
pub trait TaskStorage {
    fn load(&self) -> Result<Vec<Task>, StorageError>;
    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// One JSON object per line, one line per task
#[derive(Debug, Clone)]
pub struct JsonlStorage {
    path: PathBuf,
}

impl JsonlStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonlStorage { path: path.into() }
    }

    /// Storage for `tasks.jsonl` inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(DATA_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStorage for JsonlStorage {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        let content = match fs::read(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no data file yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        let tasks = decode_tasks(&content);
        tracing::debug!(count = tasks.len(), path = %self.path.display(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let content = encode_tasks(tasks)?;
        atomic_write(&self.path, content.as_bytes()).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::debug!(count = tasks.len(), path = %self.path.display(), "saved tasks");
        Ok(())
    }
}

/// Serialize tasks, one record per line, in the given order
pub fn encode_tasks(tasks: &[Task]) -> Result<String, StorageError> {
    let mut out = String::new();
    for task in tasks {
        let line = serde_json::to_string(task).map_err(|e| StorageError::Encode {
            id: task.id,
            source: e,
        })?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Parse task records. Blank lines are ignored and malformed lines,
/// including ones that are not valid UTF-8, are skipped without failing
/// the rest of the load.
pub fn decode_tasks(content: &[u8]) -> Vec<Task> {
    let mut tasks = Vec::new();
    for (lineno, raw) in content.split(|&b| b == b'\n').enumerate() {
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(line = lineno + 1, error = %e, "skipping task record that is not UTF-8");
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Task>(line) {
            Ok(task) => tasks.push(task),
            Err(e) => {
                tracing::warn!(line = lineno + 1, error = %e, "skipping malformed task record");
            }
        }
    }
    tasks
}

/// Write a file atomically: temp file in the same directory, then rename
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Path reported in errors from `MemoryStorage`
const MEMORY_PATH: &str = "<memory>";

#[derive(Debug, Default)]
struct MemoryState {
    tasks: Vec<Task>,
    saves: usize,
    fail_saves: bool,
}

/// In-memory storage. Clones share the same backing state, so a test can
/// keep a handle while the app owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with tasks
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let storage = Self::default();
        storage.state.borrow_mut().tasks = tasks;
        storage
    }

    /// Snapshot of what was last saved
    pub fn saved(&self) -> Vec<Task> {
        self.state.borrow().tasks.clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.state.borrow().saves
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.state.borrow_mut().fail_saves = fail;
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        Ok(self.state.borrow().tasks.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let mut state = self.state.borrow_mut();
        if state.fail_saves {
            return Err(StorageError::Write {
                path: PathBuf::from(MEMORY_PATH),
                source: io::Error::other("injected save failure"),
            });
        }
        state.tasks = tasks.to_vec();
        state.saves += 1;
        Ok(())
    }
}
