use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // bytes that survive a POSIX shell unquoted
    static ref SHELL_SAFE: Regex =
        Regex::new("^[A-Za-z0-9_@%+=:,./-]+$").expect("cannot build shell-safe regex");
}

/// Quotes one argument for inclusion in a server-parsed shell command line.
///
/// Arguments made only of safe bytes pass through unchanged; anything else is
/// wrapped in single quotes, with embedded single quotes rendered as `'\''`.
pub(crate) fn shell_quote(argument: &str) -> String {
    if !argument.is_empty() && SHELL_SAFE.is_match(argument) {
        argument.to_string()
    } else {
        format!("'{}'", argument.replace('\'', "'\\''"))
    }
}

/// Joins a command and its arguments into one shell line: arguments are
/// quoted individually, the command token itself never is.
pub(crate) fn build_command_line(command: &str, args: &[&str]) -> String {
    let mut line = command.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&shell_quote(arg));
    }
    line
}
