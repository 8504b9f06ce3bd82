//! Line-based input helpers for the interactive menu.
//!
//! Parsing here is deliberately lenient: junk tokens and out-of-range
//! numbers are dropped rather than rejected, and the command layer
//! validates whatever survives.

use std::io::{self, BufRead, Write};

/// Prints a prompt, flushes, and reads one trimmed line from stdin.
pub fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parses a roster selection: `"all"` selects every slot, otherwise the
/// input is whitespace-separated one-based slot numbers. Unparseable and
/// out-of-range tokens are silently dropped.
pub fn parse_selection(raw: &str, roster_size: usize) -> Vec<usize> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return (0..roster_size).collect();
    }
    raw.split_whitespace()
        .filter_map(|token| token.parse::<usize>().ok())
        .filter(|&number| number >= 1 && number <= roster_size)
        .map(|number| number - 1)
        .collect()
}

/// Parses a single one-based index into a zero-based one.
pub fn parse_index(raw: &str) -> Option<usize> {
    let number = raw.trim().parse::<usize>().ok()?;
    number.checked_sub(1)
}
