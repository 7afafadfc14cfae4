use crate::session::Session;
use anyhow::Result;
use std::io::Write;

/// Result of dispatching one command line.
///
/// Every command produces one of these; only the `exit` builtin asks the
/// loop to stop. This mirrors the convention of returning a boolean
/// "keep going" flag from a shell's dispatch routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for the next command.
    Continue,
    /// Terminate the interactive loop.
    Exit,
}

/// Object-safe trait for any command the shell can dispatch.
///
/// This is implemented by built-ins via a blanket impl and by the external
/// command launcher. `stdout` receives the command's regular output; error
/// and usage messages are returned as errors and reported by the caller on
/// the error stream.
pub trait Command {
    /// Executes the command, consuming it.
    fn execute(self: Box<Self>, stdout: &mut dyn Write, session: &mut Session) -> Result<Flow>;
}

/// Factory that tries to create a command from a name and its arguments.
///
/// Returns `None` when the factory doesn't recognize the `name`. Factories
/// are queried in table order and the first match wins; the external
/// launcher factory recognizes every name, so it must come last.
pub trait CommandFactory {
    /// Attempt to create a command instance for the provided name and
    /// arguments. `args` holds the arguments after the command name.
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn Command>>;
}
