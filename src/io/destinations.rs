//! Output destination abstractions for the rendered README.
//!
//! This module provides the `OutputDestination` trait and implementations
//! for a file on disk and an in-memory buffer. The generate command only
//! sees the trait, so tests can capture the document without touching the
//! file system.
//!
//! # Example
//!
//! ```rust
//! use readmegen::io::destinations::{MemoryDestination, OutputDestination};
//!
//! let dest = MemoryDestination::new();
//! dest.write_str("# Demo\n").unwrap();
//! assert_eq!(dest.get_content(), "# Demo\n");
//! ```

use crate::errors::{ReadmeError, Result};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Trait for destinations that receive the finished document.
pub trait OutputDestination {
    /// Write the complete content, replacing anything already there.
    fn write_str(&self, content: &str) -> Result<()>;

    /// Get a description of the destination for messages.
    fn description(&self) -> String;
}

/// File system output destination.
#[derive(Debug, Clone)]
pub struct FileDestination {
    path: PathBuf,
}

impl FileDestination {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl OutputDestination for FileDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        std::fs::write(&self.path, content).map_err(|e| ReadmeError::io(&self.path, e))
    }

    fn description(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// In-memory output destination for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<String>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content of the buffer.
    pub fn get_content(&self) -> String {
        self.buffer.read().expect("RwLock poisoned").clone()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.read().expect("RwLock poisoned").is_empty()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<()> {
        let mut buffer = self.buffer.write().expect("RwLock poisoned");
        buffer.clear();
        buffer.push_str(content);
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}
