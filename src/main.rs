use anyhow::{Context, Result};
use clap::Parser;
use readmegen::cli::Cli;
use readmegen::errors::{ReadmeError, EXIT_FAILURE};
use readmegen::formatting::FormattingConfig;
use readmegen::observability::{init_tracing, install_panic_hook};
use readmegen::GeneratorConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _cli = Cli::parse();
    install_panic_hook();

    // Logging first so config warnings are visible
    init_tracing(FormattingConfig::from_env().color.should_use_color());
    let config = GeneratorConfig::from_env();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let formatter = config.formatting.formatter();
            eprintln!("{}", formatter.error(&format!("Error: {:#}", err)));
            ExitCode::from(exit_code(&err))
        }
    }
}

// Side effect handler for the generate command
fn run(config: &GeneratorConfig) -> Result<()> {
    readmegen::commands::run(config)
        .with_context(|| format!("could not generate {}", config.readme_path().display()))?;
    Ok(())
}

// Pure function mapping the root cause to a process exit code
fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ReadmeError>()
        .map_or(EXIT_FAILURE, ReadmeError::exit_code)
}
