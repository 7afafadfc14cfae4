//! Splitting an input line into an argument vector.

/// Characters that separate arguments. Any run of these acts as one
/// delimiter; none of them can ever appear inside a token.
pub(crate) const DELIMITERS: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// Split one line of input into its arguments.
///
/// The first element of the result is the command name. There is no quoting,
/// escaping or globbing. An empty line, or one made up entirely of
/// delimiters, yields an empty vector; callers treat that as "no command".
///
/// Example
/// ```
/// let args = minish::lexer::split_line("echo  hello\tworld\n");
/// assert_eq!(args, ["echo", "hello", "world"]);
/// ```
pub fn split_line(line: &str) -> Vec<String> {
    line.split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
