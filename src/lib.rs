//! A small interactive command-line shell.
//!
//! This crate provides the building blocks of a minimal shell: a whitespace
//! tokenizer, a fixed table of built-in commands, a launcher for external
//! programs, and an append-only log of previously entered commands. It is
//! intentionally small and easy to read, suitable for coursework and
//! experiments with process management and argument parsing.
//!
//! The main entry point is [`Interpreter`], which owns the dispatch table and
//! the per-session state and drives the prompt–read–dispatch loop. The public
//! modules [`command`], [`history`] and [`session`] expose the traits and
//! types needed to implement additional commands.

mod builtin;
pub mod command;
mod external;
pub mod history;
mod interpreter;
pub mod lexer;
pub mod session;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
