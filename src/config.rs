//! Run configuration, read from the environment.
//!
//! The CLI takes no flags, so everything adjustable comes from variables:
//!
//! - `READMEGEN_LAYOUT`: `legacy` (default) or `compact`
//! - `READMEGEN_OUTPUT_DIR`: directory receiving `README.md` (default: cwd)
//! - `NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE`: terminal colors

use crate::formatting::FormattingConfig;
use crate::io::readme_path;
use crate::render::Layout;
use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const LAYOUT_VAR: &str = "READMEGEN_LAYOUT";
pub const OUTPUT_DIR_VAR: &str = "READMEGEN_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub layout: Layout,
    pub output_dir: PathBuf,
    pub formatting: FormattingConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            output_dir: PathBuf::from("."),
            formatting: FormattingConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let layout = lookup(LAYOUT_VAR)
            .map(|value| parse_layout(&value))
            .unwrap_or_default();

        let output_dir = lookup(OUTPUT_DIR_VAR)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            layout,
            output_dir,
            formatting: FormattingConfig::from_lookup(&lookup),
        }
    }

    pub fn readme_path(&self) -> PathBuf {
        readme_path(&self.output_dir)
    }
}

fn parse_layout(value: &str) -> Layout {
    Layout::parse(value).unwrap_or_else(|| {
        warn!(value, "unknown {}, using legacy layout", LAYOUT_VAR);
        Layout::Legacy
    })
}
