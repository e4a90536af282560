//! Observability: log subscriber setup and crash reports.
//!
//! Logs go to stderr so they never interleave with the prompts on stdout.
//! `RUST_LOG` selects the filter; without it only warnings are shown.
//!
//! ```ignore
//! use readmegen::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(false);
//! }
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    get_current_context, set_current_question, set_phase, ContextGuard, GenerationContext,
    GenerationPhase,
};
pub use panic_hook::install_panic_hook;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global tracing subscriber. Safe to call more than once;
/// later calls are ignored.
pub fn init_tracing(use_ansi: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(false)
        .try_init();
}
