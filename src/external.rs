use crate::command::{Command, CommandFactory, Flow};
use crate::interpreter::Factory;
use crate::session::Session;
use anyhow::{Context, Result};
use std::io::Write;
use std::process;

/// Command that is not a builtin.
///
/// Runs in the foreground: the shell blocks until the child reaches a
/// terminal state (normal exit or killed by a signal). The child's exit
/// code is deliberately ignored; success and failure alike hand control
/// back to the prompt.
pub(crate) struct ExternalCommand {
    argv: Vec<String>,
}

impl ExternalCommand {
    pub(crate) fn new(name: &str, args: &[&str]) -> Self {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push(name.to_owned());
        argv.extend(args.iter().map(|a| (*a).to_owned()));
        Self { argv }
    }
}

impl CommandFactory for Factory<ExternalCommand> {
    /// The launcher recognizes every name, so this factory must stay at the
    /// end of the dispatch table.
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn Command>> {
        Some(Box::new(ExternalCommand::new(name, args)))
    }
}

impl Command for ExternalCommand {
    fn execute(self: Box<Self>, _stdout: &mut dyn Write, _session: &mut Session) -> Result<Flow> {
        let mut child = process::Command::new(&self.argv[0])
            .args(&self.argv[1..])
            .spawn()
            .with_context(|| format!("{}: failed to start", self.argv[0]))?;
        child
            .wait()
            .with_context(|| format!("{}: failed waiting for completion", self.argv[0]))?;
        Ok(Flow::Continue)
    }
}

/// Spawn a command without waiting for it.
///
/// The child's handle is dropped immediately: the shell never tracks or
/// reaps background children, and their lifetime is independent of the
/// interactive loop. The program name is resolved on the platform's
/// standard search path, exactly as for foreground launches.
pub(crate) fn spawn_detached(argv: &[String]) -> Result<()> {
    process::Command::new(&argv[0])
        .args(&argv[1..])
        .spawn()
        .with_context(|| format!("{}: failed to start", argv[0]))?;
    Ok(())
}
