use std::path::Path;
use std::process::ExitCode;

use comsol_search_lib::{DocError, ErrorPayload};

/// Write rendered text to `output`, or to stdout when no path is given.
///
/// `label` names what was written ("Results", "Content") in the confirmation
/// line printed on stderr after a file write.
pub fn write_output(content: &str, output: Option<&Path>, label: &str) -> Result<(), DocError> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            eprintln!("{}", saved_message(label, path));
        }
        None => println!("{content}"),
    }
    Ok(())
}

pub fn saved_message(label: &str, path: &Path) -> String {
    format!("\u{2713} {label} saved to {}", path.display())
}

/// Render an error on stderr and return the failure exit code.
pub fn render_error(err: DocError) -> ExitCode {
    eprintln!("{}", format_error(&err.to_payload()));
    ExitCode::from(1)
}

pub fn format_error(payload: &ErrorPayload) -> String {
    match &payload.remediation {
        Some(hint) => format!("Error: {}\nHint: {}", payload.message, hint),
        None => format!("Error: {}", payload.message),
    }
}
