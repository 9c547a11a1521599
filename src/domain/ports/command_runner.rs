//! Command Runner Port
//!
//! Every external collaborator (git, svg-sprite, sass, babel) is invoked
//! through this seam so use cases can be exercised without the real tools.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::error::AssetsResult;

/// A single external tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Short tool name for messages (`/usr/bin/sass` → `sass`)
    pub fn tool_name(&self) -> String {
        self.program
            .file_stem()
            .unwrap_or(self.program.as_os_str())
            .to_string_lossy()
            .into_owned()
    }
}

/// Runs external tools to completion.
///
/// Implementations must fail when the tool exits unsuccessfully rather
/// than leaving callers to notice missing output later.
pub trait CommandRunner {
    fn run(&self, invocation: &ToolInvocation) -> AssetsResult<()>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, invocation: &ToolInvocation) -> AssetsResult<()> {
        (**self).run(invocation)
    }
}

/// Test runner that records invocations and simulates tool effects
#[cfg(test)]
pub struct FakeRunner<F>
where
    F: Fn(&ToolInvocation) -> AssetsResult<()>,
{
    pub calls: std::cell::RefCell<Vec<ToolInvocation>>,
    effect: F,
}

#[cfg(test)]
impl<F> FakeRunner<F>
where
    F: Fn(&ToolInvocation) -> AssetsResult<()>,
{
    pub fn new(effect: F) -> Self {
        Self {
            calls: std::cell::RefCell::new(Vec::new()),
            effect,
        }
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.tool_name()).collect()
    }
}

#[cfg(test)]
impl<F> CommandRunner for FakeRunner<F>
where
    F: Fn(&ToolInvocation) -> AssetsResult<()>,
{
    fn run(&self, invocation: &ToolInvocation) -> AssetsResult<()> {
        self.calls.borrow_mut().push(invocation.clone());
        (self.effect)(invocation)
    }
}
