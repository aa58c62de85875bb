use crate::extract::{decode, split_literals};
use lazy_static::lazy_static;
use regex::Regex;

/// One decoded append-call argument, positioned by physical line.
/// Ordered by `line` ascending; several events may share a line.
#[derive(Debug, Clone)]
pub struct AppendEvent {
    pub line: usize,
    pub text: String,
}

lazy_static! {
    /// An accumulator declaration: `StringBuilder name = new StringBuilder(...);`
    /// or `var name = new StringBuilder(...);`. Group 1 / group 2 capture
    /// the bound name depending on the form. The constructor argument list
    /// is skipped up to the terminator without being parsed.
    static ref DECLARATION: Regex = Regex::new(
        r"\bStringBuilder\s+(\w+)\s*=\s*new\s+StringBuilder\s*\([^;]*\)\s*;|\bvar\s+(\w+)\s*=\s*new\s+StringBuilder\s*\([^;]*\)\s*;"
    )
    .unwrap();

    /// An append call on one line: `name.Append(...)` or `name.AppendLine(...)`.
    /// Group 1: receiver name, group 2: the `Line` suffix when present,
    /// group 3: the argument text, lazily up to the first `);`. Arguments
    /// spanning lines are not matched; the scan is per physical line, as is
    /// the event model.
    static ref APPEND: Regex = Regex::new(r"\b(\w+)\.Append(Line)?\s*\((.*?)\)\s*;").unwrap();
}

/// Names bound to a fresh accumulator, in declaration order.
pub fn accumulator_names(sanitized: &str) -> Vec<String> {
    DECLARATION
        .captures_iter(sanitized)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}

/// Decode every append call bound to `name` on one line.
///
/// The argument is run through literal recovery; calls whose argument
/// yields no literal parts are skipped. `AppendLine` gains exactly one
/// trailing `\n` unless the decoded text already ends in one.
pub fn appends_on_line(line: &str, name: &str) -> Vec<String> {
    let mut out = Vec::new();
    for caps in APPEND.captures_iter(line) {
        if caps.get(1).map(|m| m.as_str()) != Some(name) {
            continue;
        }
        let is_line = caps.get(2).is_some();
        let arg = caps.get(3).map(|m| m.as_str()).unwrap_or("");
        let parts = split_literals(arg);
        if parts.is_empty() {
            continue;
        }
        let mut text = decode(&parts);
        if is_line && !text.ends_with('\n') {
            text.push('\n');
        }
        out.push(text);
    }
    out
}

/// Collect all append events for `name` across the buffer, in line order.
pub fn collect_events(lines: &[&str], name: &str) -> Vec<AppendEvent> {
    let mut events = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        for text in appends_on_line(line, name) {
            events.push(AppendEvent { line: i, text });
        }
    }
    events
}
