use crate::history::HistoryLog;

/// Mutable state that lives for one interactive session.
///
/// Constructed when the interpreter starts and dropped when it ends; passed
/// by mutable reference through dispatch so commands never reach for
/// process-wide globals.
#[derive(Debug)]
pub struct Session {
    /// Log of previously entered commands, in insertion order.
    pub history: HistoryLog,
}

impl Session {
    pub fn new() -> Self {
        Self {
            history: HistoryLog::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
