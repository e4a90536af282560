//! The generate command: collect answers, render, persist.
//!
//! Nothing is written until every answer is in and the document is fully
//! rendered, so a cancelled session leaves any existing README untouched.

use crate::config::GeneratorConfig;
use crate::errors::Result;
use crate::formatting::OutputFormatter;
use crate::io::{FileDestination, OutputDestination};
use crate::observability::{set_phase, GenerationPhase};
use crate::prompt::PromptCollector;
use crate::render::{render_readme_with_layout, Layout};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Run one session against the given collector and destination.
///
/// Returns the rendered document after it has been written.
pub fn generate<R: BufRead, W: Write>(
    collector: &mut PromptCollector<R, W>,
    layout: Layout,
    destination: &dyn OutputDestination,
) -> Result<String> {
    let answers = {
        let _phase = set_phase(GenerationPhase::CollectingAnswers);
        collector.collect()?
    };

    let document = {
        let _phase = set_phase(GenerationPhase::Rendering);
        render_readme_with_layout(&answers, layout)
    };
    debug!(?layout, bytes = document.len(), "rendered README");

    let _phase = set_phase(GenerationPhase::Writing);
    destination.write_str(&document)?;
    info!(destination = %destination.description(), "README written");

    Ok(document)
}

/// Interactive entry point: prompts on stdin/stdout and writes `README.md`.
///
/// Prints the success message and returns the destination description.
pub fn run(config: &GeneratorConfig) -> Result<String> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let destination = FileDestination::new(config.readme_path());

    {
        let mut collector =
            PromptCollector::new(stdin.lock(), stdout.lock(), config.formatting.formatter());
        generate(&mut collector, config.layout, &destination)?;
    }

    let formatter = config.formatting.formatter();
    println!("{}", success_message(formatter.as_ref(), &destination));
    Ok(destination.description())
}

pub fn success_message(formatter: &dyn OutputFormatter, destination: &dyn OutputDestination) -> String {
    formatter.success(&format!("Successfully wrote to {}", destination.description()))
}
