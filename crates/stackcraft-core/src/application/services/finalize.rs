//! Post-scaffold external steps: package install and git init.
//!
//! Both only report; the orchestrator decides what is fatal.

use std::path::Path;

use tracing::{info, instrument};

use crate::application::ApplicationError;
use crate::application::ports::{CommandSpec, ProcessRunner};
use crate::error::StackResult;

pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from stackcraft";

/// Run `bun install` in `root`.
#[instrument(skip(runner))]
pub fn install_dependencies(runner: &dyn ProcessRunner, root: &Path) -> StackResult<()> {
    let command = CommandSpec::new("bun", &["install"], root);
    info!("Installing dependencies");
    let output = runner.run(&command).map_err(|e| ApplicationError::DependencyInstallFailed {
        reason: e.to_string(),
    })?;
    if !output.success {
        return Err(ApplicationError::DependencyInstallFailed {
            reason: failure_reason(&command, output.code, &output.stderr),
        }
        .into());
    }
    Ok(())
}

/// `git init`, `git add .`, `git commit`. Stops at the first failing step.
#[instrument(skip(runner))]
pub fn init_git(runner: &dyn ProcessRunner, root: &Path) -> StackResult<()> {
    let steps = [
        CommandSpec::new("git", &["init"], root),
        CommandSpec::new("git", &["add", "."], root),
        CommandSpec::new("git", &["commit", "-m", INITIAL_COMMIT_MESSAGE], root),
    ];
    for command in &steps {
        let output = runner.run(command)?;
        if !output.success {
            return Err(ApplicationError::CommandFailed {
                command: command.display(),
                reason: failure_reason(command, output.code, &output.stderr),
            }
            .into());
        }
    }
    info!("Initialised git repository");
    Ok(())
}

fn failure_reason(command: &CommandSpec, code: Option<i32>, stderr: &str) -> String {
    let status = code.map_or_else(|| "terminated by signal".to_string(), |c| format!("exit code {c}"));
    let detail = stderr.trim();
    if detail.is_empty() {
        format!("'{}' failed with {status}", command.display())
    } else {
        format!("'{}' failed with {status}: {detail}", command.display())
    }
}
