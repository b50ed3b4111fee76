use std::path::Path;
use std::process::{Command, ExitStatus};

/// Standard output of one run of the instrumented executable.
pub struct Captured {
    pub stdout: String,
    pub status: ExitStatus,
}

/// Run `executable` with no arguments and wait for it to finish.
/// Standard error is passed through; standard output is captured whole.
pub fn run(executable: &Path) -> Result<Captured, String> {
    let absolute = std::path::absolute(executable)
        .map_err(|e| format!("cannot resolve '{}': {}", executable.display(), e))?;

    let output = Command::new(&absolute)
        .stderr(std::process::Stdio::inherit())
        .output()
        .map_err(|e| format!("cannot run '{}': {}", absolute.display(), e))?;

    let stdout = String::from_utf8(output.stdout)
        .map_err(|e| format!("output of '{}' is not UTF-8: {}", absolute.display(), e))?;

    Ok(Captured {
        stdout,
        status: output.status,
    })
}
