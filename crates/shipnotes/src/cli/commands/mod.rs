//! CLI commands

mod init;
mod release_notes;
mod typos;

pub use init::InitCommand;
pub use release_notes::ReleaseNotesCommand;
pub use typos::TyposCommand;

use std::io::Write;
use std::path::Path;

/// Write command output to a file, or to stdout when no path is given
pub(crate) fn emit(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
