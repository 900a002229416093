//! Process adapter using std::process.

use std::process::{Command, Stdio};

use tracing::debug;

use stackcraft_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandSpec, ProcessRunner},
    },
    error::StackResult,
};

/// Runs commands on the host, inheriting stdout so package manager progress
/// stays visible. Stderr is captured for error reporting.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &CommandSpec) -> StackResult<CommandOutput> {
        debug!(command = %command.display(), cwd = %command.cwd.display(), "Spawning");
        let output = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ApplicationError::CommandFailed {
                command: command.display(),
                reason: e.to_string(),
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_command_failed() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CommandSpec::new("definitely-not-a-real-binary-4821", &[], dir.path());
        let err = SystemProcessRunner::new().run(&spec).unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-real-binary-4821"));
    }
}
