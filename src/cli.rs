use crate::formatter;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "format-tickets")]
#[command(about = "Write a JSON array of tickets to a text file, one pretty-printed ticket per block")]
#[command(version)]
pub struct CliArgs {
    /// JSON file containing an array of ticket objects
    #[arg(value_name = "INPUT_JSON_FILE", allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Where to write the formatted tickets
    /// Default: formatted_<input stem>.txt next to the input file
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    ///
    /// Help and version requests exit 0 as usual; any other parse failure
    /// (missing input, extra arguments, unknown flags) prints the usage line
    /// to stdout and exits with status 1.
    pub fn parse_args() -> Self {
        match CliArgs::try_parse() {
            Ok(args) => args,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
            Err(e) => {
                log::debug!("argument parsing failed: {}", e);
                println!("{}", usage());
                std::process::exit(1);
            }
        }
    }

    /// Output path, falling back to the one derived from the input path
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| formatter::derive_output_path(&self.input))
    }
}

/// One-line usage text, e.g. `Usage: format-tickets [OPTIONS] <INPUT_JSON_FILE>`
pub fn usage() -> String {
    CliArgs::command().render_usage().to_string()
}
