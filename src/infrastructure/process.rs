//! System Command Runner
//!
//! Runs external tools as child processes and checks their exit status.

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandRunner, ToolInvocation};
use crate::error::{AssetsError, AssetsResult};

/// Runs tools with the real OS process API
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    /// Discard tool stdout (keeps NDJSON output parseable)
    quiet: bool,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &ToolInvocation) -> AssetsResult<()> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args).stdin(Stdio::null());

        if self.quiet {
            cmd.stdout(Stdio::null()).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd.status().map_err(|e| AssetsError::ToolSpawn {
            tool: invocation.tool_name(),
            message: e.to_string(),
        })?;

        if !status.success() {
            return Err(AssetsError::ToolFailed {
                tool: invocation.tool_name(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
