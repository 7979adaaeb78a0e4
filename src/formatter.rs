//! Ticket formatting pipeline.
//!
//! Reads a JSON array of tickets, pretty-prints each one and writes them to a
//! text file separated by [`TICKET_DELIMITER`]. Tickets are never interpreted;
//! each array element is re-serialized as-is.

use crate::error::FormatError;
use log::debug;
use serde_json::Value;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Separator written between consecutive tickets (never after the last one).
pub const TICKET_DELIMITER: &str = "\n\n--- TICKET BREAK ---\n\n";

const OUTPUT_PREFIX: &str = "formatted_";
const OUTPUT_EXTENSION: &str = "txt";

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tickets: usize,
}

impl fmt::Display for FormatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.tickets == 1 { "ticket" } else { "tickets" };
        write!(
            f,
            "Successfully formatted {} {} from '{}' and saved to '{}'",
            self.tickets,
            noun,
            self.input.display(),
            self.output.display()
        )
    }
}

/// Run the whole pipeline: load `input`, render every ticket, write `output`.
///
/// `output` is not touched unless loading and rendering both succeed.
pub fn format_tickets(input: &Path, output: &Path) -> Result<FormatSummary, FormatError> {
    let tickets = load_tickets(input)?;
    let rendered = render_tickets(&tickets)?;
    write_output(output, &rendered)?;

    Ok(FormatSummary { input: input.to_path_buf(), output: output.to_path_buf(), tickets: tickets.len() })
}

/// Read `path` and parse it as a JSON array of tickets.
pub fn load_tickets(path: &Path) -> Result<Vec<Value>, FormatError> {
    debug!("Reading tickets from {:?}", path);

    let contents = fs::read_to_string(path).map_err(|e| FormatError::from_read(path.to_path_buf(), e))?;
    let document: Value = serde_json::from_str(&contents)
        .map_err(|source| FormatError::InvalidJson { path: path.to_path_buf(), source })?;

    match document {
        Value::Array(tickets) => {
            debug!("Parsed {} tickets from {:?}", tickets.len(), path);
            Ok(tickets)
        }
        other => Err(FormatError::NotAnArray { path: path.to_path_buf(), found: json_type_name(&other) }),
    }
}

/// Pretty-print each ticket (2-space indent, non-ASCII kept literal) and join
/// them with [`TICKET_DELIMITER`]. An empty slice renders to an empty string.
pub fn render_tickets(tickets: &[Value]) -> Result<String, serde_json::Error> {
    let blocks = tickets.iter().map(serde_json::to_string_pretty).collect::<Result<Vec<_>, _>>()?;
    Ok(blocks.join(TICKET_DELIMITER))
}

/// Write `contents` to `path`, creating or truncating it.
pub fn write_output(path: &Path, contents: &str) -> Result<(), FormatError> {
    debug!("Writing {} bytes to {:?}", contents.len(), path);
    fs::write(path, contents).map_err(|source| FormatError::Write { path: path.to_path_buf(), source })
}

/// Output path for `input`: same directory, extension dropped, file name
/// prefixed with `formatted_` and given a `.txt` extension.
///
/// `tickets.json` becomes `formatted_tickets.txt`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(OUTPUT_PREFIX);
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push(".");
    name.push(OUTPUT_EXTENSION);

    input.with_file_name(name)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "formatter_test.rs"]
mod formatter_test;
