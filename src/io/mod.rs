pub mod destinations;

pub use destinations::{FileDestination, MemoryDestination, OutputDestination};

use std::path::{Path, PathBuf};

/// Name of the generated document.
pub const README_FILE_NAME: &str = "README.md";

pub fn readme_path(output_dir: &Path) -> PathBuf {
    output_dir.join(README_FILE_NAME)
}
