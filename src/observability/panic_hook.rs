//! Custom panic hook for structured crash reports.
//!
//! A crash report names the phase and question that were active, the panic
//! message and location, and how to get a backtrace.

use super::context::{get_current_context, GenerationContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════";

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!();
        eprintln!("{}", crash_report(info, &get_current_context()));
    }));
}

fn crash_report(info: &PanicHookInfo<'_>, context: &GenerationContext) -> String {
    let mut lines = vec![
        RULE.to_string(),
        format!("READMEGEN CRASH REPORT (v{}, {})", VERSION, std::env::consts::OS),
        RULE.to_string(),
        format!("PANIC: {}", extract_panic_message(info)),
    ];

    if let Some(location) = info.location() {
        lines.push(format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }

    lines.extend(context_lines(context));

    if std::env::var("RUST_BACKTRACE").is_ok() {
        lines.push(RULE.to_string());
        lines.push(std::backtrace::Backtrace::capture().to_string());
    } else {
        lines.push("Run with RUST_BACKTRACE=1 for stack trace".to_string());
        lines.push(RULE.to_string());
    }

    lines.join("\n")
}

fn context_lines(context: &GenerationContext) -> Vec<String> {
    let phase = context
        .phase
        .map(|phase| phase.to_string())
        .unwrap_or_else(|| "(not set - crash occurred before generation started)".to_string());

    let mut lines = vec![format!("Phase: {}", phase)];
    if let Some(question) = context.current_question {
        lines.push(format!("Question: {}", question));
    }
    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
