use crate::command::{Command, CommandFactory, Flow};
use crate::external;
use crate::interpreter::Factory;
use crate::session::Session;
use anyhow::{Context, Result, anyhow};
use argh::{EarlyExit, FromArgs};
use std::env;
use std::io::Write;

/// Built-in commands known to the shell at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed
/// directly in-process without spawning a child. Errors they return are
/// reported by the dispatch layer on the error stream; none of them ever
/// terminates the loop except `exit`, which does so by returning
/// [`Flow::Exit`] rather than by exiting the process.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "cd" or "history".
    fn name() -> &'static str;

    /// Executes the command against the provided output stream and session.
    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<Flow>;
}

impl<T: BuiltinCommand> Command for T {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, session: &mut Session) -> Result<Flow> {
        T::execute(*self, stdout, session)
    }
}

/// Outcome of an argument-parse early exit: either generated `--help` text
/// (printed to stdout) or a usage error (surfaced as an error).
struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl Command for InvalidArgs {
    fn execute(self: Box<Self>, stdout: &mut dyn Write, _session: &mut Session) -> Result<Flow> {
        if self.is_error {
            return Err(anyhow!("{}", self.output.trim_end()));
        }
        stdout.write_all(self.output.as_bytes())?;
        Ok(Flow::Continue)
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn Command>> {
        if name == T::name() {
            Some(match T::from_args(&[name], args) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, status }) => Box::new(InvalidArgs {
                    output,
                    is_error: status.is_err(),
                }),
            })
        } else {
            None
        }
    }
}

#[derive(FromArgs)]
/// Change the current working directory.
pub struct Cd {
    #[argh(positional)]
    /// directory to switch to; absolute or relative to the current directory
    pub target: Option<String>,
}

impl BuiltinCommand for Cd {
    fn name() -> &'static str {
        "cd"
    }

    fn execute(self, _stdout: &mut dyn Write, _session: &mut Session) -> Result<Flow> {
        let Some(target) = self.target else {
            return Err(anyhow!("cd: expected argument"));
        };
        env::set_current_dir(&target).with_context(|| format!("cd: can't chdir to {target}"))?;
        Ok(Flow::Continue)
    }
}

#[derive(FromArgs)]
/// Print the list of built-in commands.
pub struct Help {}

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn execute(self, stdout: &mut dyn Write, _session: &mut Session) -> Result<Flow> {
        writeln!(stdout, "Welcome to minish.")?;
        writeln!(stdout, "Type program names and arguments, and press enter.")?;
        writeln!(stdout, "The following commands are built in:")?;
        for name in [
            Cd::name(),
            Help::name(),
            Exit::name(),
            Bg::name(),
            History::name(),
        ] {
            writeln!(stdout, "  {name}")?;
        }
        writeln!(
            stdout,
            "Use the man command for information on other programs."
        )?;
        Ok(Flow::Continue)
    }
}

#[derive(FromArgs)]
/// Leave the shell.
pub struct Exit {
    #[argh(positional, greedy)]
    /// accepted and ignored
    pub _args: Vec<String>,
}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    /// Requests loop termination and does nothing else; tearing the session
    /// down is the loop's job.
    fn execute(self, _stdout: &mut dyn Write, _session: &mut Session) -> Result<Flow> {
        Ok(Flow::Exit)
    }
}

#[derive(FromArgs)]
/// Run a command in the background, without waiting for it to finish.
pub struct Bg {
    #[argh(positional, greedy)]
    /// the command and its arguments
    pub command: Vec<String>,
}

impl BuiltinCommand for Bg {
    fn name() -> &'static str {
        "bg"
    }

    fn execute(self, _stdout: &mut dyn Write, _session: &mut Session) -> Result<Flow> {
        if self.command.is_empty() {
            return Err(anyhow!("bg: expected a command to run"));
        }
        external::spawn_detached(&self.command)?;
        Ok(Flow::Continue)
    }
}

#[derive(FromArgs)]
/// Print previously entered commands with their sequence numbers.
pub struct History {}

impl BuiltinCommand for History {
    fn name() -> &'static str {
        "history"
    }

    fn execute(self, stdout: &mut dyn Write, session: &mut Session) -> Result<Flow> {
        for line in session.history.render() {
            writeln!(stdout, "{line}")?;
        }
        Ok(Flow::Continue)
    }
}
