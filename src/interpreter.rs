use crate::command::{CommandFactory, Flow};
use crate::lexer;
use crate::session::Session;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;

/// Prompt printed before each read, with no trailing newline.
const PROMPT: &str = "> ";

/// Factory allows creating instances of Command.
///
/// Only supports commands defined in this crate: builtins and
/// ExternalCommand.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// The interactive shell: a dispatch table plus per-session state.
///
/// Each input line is tokenized on whitespace, matched against the factory
/// table (builtins first, the external launcher as the always-matching
/// fallback), executed, and recorded in the session's history log. See
/// [`Default`] for the factories included out of the box.
///
/// Example
/// ```
/// use minish::{Interpreter, command::Flow};
/// let mut sh = Interpreter::default();
/// assert_eq!(sh.execute_line("help"), Flow::Continue);
/// assert_eq!(sh.execute_line("exit"), Flow::Exit);
/// ```
pub struct Interpreter {
    commands: Vec<Box<dyn CommandFactory>>,
    session: Session,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            commands,
            session: Session::new(),
        }
    }

    /// Tokenize, dispatch and record one line of input.
    ///
    /// Returns the continuation signal for the loop. A line with no tokens
    /// is a no-op: nothing is dispatched, nothing is recorded, and the loop
    /// keeps running. Command failures are reported on the error stream and
    /// also keep the loop running; only the `exit` builtin stops it.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        self.execute_line_to(line, &mut std::io::stdout())
    }

    fn execute_line_to(&mut self, line: &str, stdout: &mut dyn Write) -> Flow {
        let args = lexer::split_line(line);
        if args.is_empty() {
            return Flow::Continue;
        }
        let flow = self.dispatch(&args, stdout);
        // Recorded once the command itself is done, so `history` lists every
        // earlier command but never the invocation that is printing it.
        self.session.history.record(&args);
        flow
    }

    fn dispatch(&mut self, args: &[String], stdout: &mut dyn Write) -> Flow {
        let name = args[0].as_str();
        let rest: Vec<&str> = args[1..].iter().map(String::as_str).collect();
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(name, &rest) {
                return match cmd.execute(stdout, &mut self.session) {
                    Ok(flow) => flow,
                    Err(err) => {
                        eprintln!("minish: {err:#}");
                        Flow::Continue
                    }
                };
            }
        }
        // Unreachable with the default table: the external launcher factory
        // matches every name.
        Flow::Continue
    }

    /// Run the interactive prompt-read-dispatch loop until it is asked to
    /// stop.
    ///
    /// The loop ends cleanly when the `exit` builtin runs or the input
    /// source reaches end-of-stream. An interrupt abandons the current line
    /// and prompts again. Any other read failure is returned to the caller
    /// as fatal.
    pub fn repl(&mut self) -> anyhow::Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    // The editor's recall buffer (up-arrow) is separate from
                    // the session history log.
                    rl.add_history_entry(line.as_str())?;
                    if self.execute_line(&line) == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the default dispatch table: the builtins
    /// `cd`, `help`, `exit`, `bg` and `history`, then the external command
    /// launcher as the fallback.
    fn default() -> Self {
        use crate::builtin::{Bg, Cd, Exit, Help, History};
        use crate::external::ExternalCommand;
        Self::new(vec![
            Box::new(Factory::<Cd>::default()),
            Box::new(Factory::<Help>::default()),
            Box::new(Factory::<Exit>::default()),
            Box::new(Factory::<Bg>::default()),
            Box::new(Factory::<History>::default()),
            Box::new(Factory::<ExternalCommand>::default()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::lock_current_dir;

    #[test]
    fn blank_input_is_a_no_op() {
        let mut sh = Interpreter::default();
        let mut out = Vec::new();
        assert_eq!(sh.execute_line_to("   \t  ", &mut out), Flow::Continue);
        assert!(out.is_empty());
        assert!(sh.session.history.is_empty());
    }

    #[test]
    fn exit_terminates_the_loop() {
        let mut sh = Interpreter::default();
        assert_eq!(
            sh.execute_line_to("exit", &mut Vec::new()),
            Flow::Exit
        );
    }

    #[test]
    #[cfg(unix)]
    fn history_lists_prior_commands_but_not_itself() {
        let _lock = lock_current_dir();
        let orig = std::env::current_dir().unwrap();

        let mut sh = Interpreter::default();
        let mut out = Vec::new();
        assert_eq!(sh.execute_line_to("help", &mut out), Flow::Continue);
        assert_eq!(sh.execute_line_to("cd /", &mut out), Flow::Continue);

        let mut listing = Vec::new();
        assert_eq!(sh.execute_line_to("history", &mut listing), Flow::Continue);
        assert_eq!(String::from_utf8(listing).unwrap(), "1 help \n2 cd /\n");

        // The history invocation is visible to the next command.
        assert_eq!(sh.session.history.len(), 3);

        std::env::set_current_dir(orig).unwrap();
    }

    #[test]
    #[cfg(unix)]
    fn external_commands_run_in_the_foreground() {
        let mut sh = Interpreter::default();
        assert_eq!(
            sh.execute_line_to("true", &mut Vec::new()),
            Flow::Continue
        );
    }

    #[test]
    fn unknown_commands_never_stop_the_loop() {
        let mut sh = Interpreter::default();
        assert_eq!(
            sh.execute_line_to("minish-test-no-such-program", &mut Vec::new()),
            Flow::Continue
        );
    }

    #[test]
    fn usage_errors_never_stop_the_loop() {
        let _lock = lock_current_dir();
        let orig = std::env::current_dir().unwrap();

        let mut sh = Interpreter::default();
        assert_eq!(sh.execute_line_to("cd", &mut Vec::new()), Flow::Continue);
        assert_eq!(std::env::current_dir().unwrap(), orig);
    }

    #[test]
    #[cfg(unix)]
    fn background_spawn_returns_promptly() {
        let mut sh = Interpreter::default();
        let started = std::time::Instant::now();
        assert_eq!(
            sh.execute_line_to("bg sleep 30", &mut Vec::new()),
            Flow::Continue
        );
        assert!(started.elapsed() < std::time::Duration::from_secs(5));
    }

    #[test]
    fn every_dispatched_line_is_recorded() {
        let mut sh = Interpreter::default();
        let mut out = Vec::new();
        sh.execute_line_to("help me please", &mut out);
        let lines: Vec<String> = sh.session.history.render().collect();
        // Only the name and first argument survive recording.
        assert_eq!(lines, ["1 help me"]);
    }

    #[test]
    fn builtins_run_in_process() {
        // Builtin output lands in the provided sink; a spawned child would
        // write to the inherited stdout instead.
        let mut sh = Interpreter::default();
        let mut out = Vec::new();
        assert_eq!(sh.execute_line_to("help", &mut out), Flow::Continue);
        assert!(!out.is_empty());
    }
}
