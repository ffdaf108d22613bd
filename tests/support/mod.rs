use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub fn workshop_binary() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_workshop"))
}

/// Command for the workshop binary with capacity and logging variables
/// cleared so the defaults apply unless a test sets them.
pub fn workshop_command() -> Command {
    let mut cmd = Command::new(workshop_binary());
    cmd.env_remove("WORKSHOP_MAX_VEHICLES")
        .env_remove("WORKSHOP_MAX_REPAIRS")
        .env_remove("RUST_LOG");
    cmd
}

pub fn write_script(lines: &[&str]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate script file")?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    file.flush()?;
    Ok(file)
}

/// Run a workshop command that is expected to exit cleanly, returning its
/// output or an error carrying the full transcript.
pub fn run_workshop(mut cmd: Command) -> Result<Output> {
    let output = cmd.output().context("spawning workshop binary")?;
    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("workshop exited with {}\n--- stdout ---\n{stdout}\n--- stderr ---\n{stderr}", output.status);
    }
    Ok(output)
}
