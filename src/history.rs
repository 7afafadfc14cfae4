//! The in-memory log of previously entered commands.

/// One recorded command.
///
/// Only the command name and its first argument are kept; anything past the
/// second token of the input line is discarded at recording time. Entries
/// are immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryEntry {
    command: String,
    first_arg: Option<String>,
}

/// Append-only log of executed command lines.
///
/// Sequence numbers are 1-based, dense, and derived from insertion order;
/// entries are never mutated, removed or persisted. The log grows without
/// bound for the lifetime of the session that owns it.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append one entry built from the command name and its first argument.
    ///
    /// An empty argument vector records nothing.
    pub fn record(&mut self, args: &[String]) {
        let Some(command) = args.first() else {
            return;
        };
        self.entries.push(HistoryEntry {
            command: command.clone(),
            first_arg: args.get(1).cloned(),
        });
    }

    /// Render every entry as `"<n> <command> <first-arg>"` in insertion
    /// order, lazily.
    ///
    /// A missing first argument renders as the empty string, which leaves a
    /// trailing space after the command name.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().enumerate().map(|(idx, entry)| {
            format!(
                "{} {} {}",
                idx + 1,
                entry.command,
                entry.first_arg.as_deref().unwrap_or("")
            )
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn records_in_insertion_order_with_dense_numbering() {
        let mut log = HistoryLog::new();
        log.record(&args(&["help"]));
        log.record(&args(&["cd", "/"]));
        log.record(&args(&["ls", "-l"]));

        let lines: Vec<String> = log.render().collect();
        assert_eq!(lines, ["1 help ", "2 cd /", "3 ls -l"]);
    }

    #[test]
    fn missing_first_argument_leaves_trailing_space() {
        let mut log = HistoryLog::new();
        log.record(&args(&["history"]));
        assert_eq!(log.render().next().unwrap(), "1 history ");
    }

    #[test]
    fn arguments_past_the_second_token_are_discarded() {
        let mut log = HistoryLog::new();
        log.record(&args(&["echo", "one", "two", "three"]));
        assert_eq!(log.render().next().unwrap(), "1 echo one");
    }

    #[test]
    fn empty_argument_vector_records_nothing() {
        let mut log = HistoryLog::new();
        log.record(&[]);
        assert!(log.is_empty());
        assert_eq!(log.render().count(), 0);
    }

    #[test]
    fn render_can_be_repeated() {
        let mut log = HistoryLog::new();
        log.record(&args(&["pwd"]));
        assert_eq!(log.render().count(), 1);
        assert_eq!(log.render().count(), 1);
        assert_eq!(log.len(), 1);
    }
}
