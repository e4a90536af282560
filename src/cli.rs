use clap::Parser;

/// The generator asks its questions interactively, so the only arguments are
/// clap's built-in `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(name = "readmegen")]
#[command(
    about = "Generate a project README.md by answering a few questions",
    long_about = "Generate a project README.md by answering a few questions.\n\n\
        Environment:\n  \
        READMEGEN_LAYOUT      legacy (default) or compact\n  \
        READMEGEN_OUTPUT_DIR  directory to write README.md into (default: .)\n  \
        NO_COLOR              disable colored prompts\n  \
        RUST_LOG              log filter for diagnostics on stderr"
)]
#[command(version)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rejects_arguments() {
        assert!(Cli::try_parse_from(["readmegen", "--output", "x"]).is_err());
        assert!(Cli::try_parse_from(["readmegen"]).is_ok());
    }
}
