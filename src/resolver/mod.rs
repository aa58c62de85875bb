mod events;

pub use events::{accumulator_names, appends_on_line, collect_events, AppendEvent};

use crate::blocks::{compute_depths, locate_chain};

/// Strip trailing horizontal whitespace from every line, then trim the
/// whole string.
pub fn tidy(sql: &str) -> String {
    sql.split('\n')
        .map(|l| l.trim_end_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Reconstruct query strings from every accumulator in the buffer.
///
/// Each declared accumulator is processed independently, in declaration
/// order. When its appends fall inside a conditional chain, one string is
/// produced per arm: the branch-independent prefix (events before the
/// chain), that arm's body events, and the branch-independent suffix
/// (events after the chain). Otherwise all events merge into one string.
/// Empty results after tidying are dropped.
pub fn resolve_accumulators(sanitized: &str) -> Vec<String> {
    let mut results = Vec::new();

    let names = accumulator_names(sanitized);
    if names.is_empty() {
        return results;
    }

    let lines: Vec<&str> = sanitized.split('\n').collect();
    let depths = compute_depths(&lines);

    for name in &names {
        let events = collect_events(&lines, name);
        if events.is_empty() {
            continue;
        }

        let append_lines: Vec<usize> = events.iter().map(|e| e.line).collect();
        let chain = match locate_chain(&lines, &depths, &append_lines) {
            Some(chain) => chain,
            None => {
                let merged: String = events.iter().map(|e| e.text.as_str()).collect();
                let sql = tidy(&merged);
                if !sql.is_empty() {
                    results.push(sql);
                }
                continue;
            }
        };

        let head: String = events
            .iter()
            .filter(|e| e.line < chain.start)
            .map(|e| e.text.as_str())
            .collect();
        let tail: String = events
            .iter()
            .filter(|e| e.line > chain.end)
            .map(|e| e.text.as_str())
            .collect();

        for block in &chain.blocks {
            let body: String = events
                .iter()
                .filter(|e| e.line >= block.body_start && e.line <= block.body_end)
                .map(|e| e.text.as_str())
                .collect();
            let sql = tidy(&format!("{}{}{}", head, body, tail));
            if !sql.is_empty() {
                results.push(sql);
            }
        }
    }

    results
}
