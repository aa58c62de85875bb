//! Recover embedded SQL statements from C#-style source that builds query
//! text by string concatenation or `StringBuilder` appends.
//!
//! The pipeline is pure and line-oriented: sanitize away comments, recover
//! string literals from assignment right-hand sides, then replay
//! accumulator appends — splitting per conditional arm when the appends
//! sit inside an `if` / `else if` / `else` chain. No AST is built; lexical
//! state plus a brace-depth table is enough for the job.

pub mod blocks;
pub mod extract;
pub mod report;
pub mod resolver;
pub mod scanner;

use std::collections::HashSet;

/// Extract every SQL candidate from a source buffer.
///
/// Returns assignment-derived strings first, then accumulator-derived
/// strings, each group in source order, deduplicated by exact value with
/// the first occurrence kept. An empty result is a normal outcome for
/// input with no query-building code, not an error; no input can make
/// this fail.
pub fn extract_sql(code: &str) -> Vec<String> {
    let clean = scanner::sanitize(code);

    let mut results = Vec::new();
    for expr in extract::extract_assignments(&clean) {
        let parts = extract::split_literals(expr);
        if parts.is_empty() {
            continue;
        }
        let joined = extract::decode(&parts);
        if !joined.trim().is_empty() {
            results.push(resolver::tidy(&joined));
        }
    }

    results.extend(resolver::resolve_accumulators(&clean));

    let mut seen = HashSet::new();
    results.retain(|sql| seen.insert(sql.clone()));
    results
}
