// Export modules for library usage
pub mod answers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod prompt;
pub mod render;

// Re-export commonly used types
pub use crate::answers::{license_info_by_name, AnswerSet, License, LicenseInfo};
pub use crate::config::GeneratorConfig;
pub use crate::errors::{ReadmeError, Result};
pub use crate::io::{FileDestination, MemoryDestination, OutputDestination};
pub use crate::prompt::{readme_questions, PromptCollector, Question};
pub use crate::render::{render_readme, render_readme_with_layout, Layout};
