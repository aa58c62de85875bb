use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches the two statement shapes that carry query text:
    /// a `string`/`var` local declaration with initializer, or an
    /// assignment to a `.CommandText` member. Group 1 captures the RHS,
    /// lazily, up to the next `;`.
    ///
    /// Edge cases: the leading `\b` keeps identifiers that merely end in
    /// `string`/`var` from anchoring a match; a `;` inside a string literal
    /// on the RHS ends the capture early (accepted, since only quoted spans
    /// are recovered from the capture and a literal containing `;` keeps
    /// its opening quote before the cut); matches cannot overlap because
    /// each is anchored at its terminator.
    static ref ASSIGNMENT: Regex = Regex::new(
        r"(?s)(?:\b(?:string|var)\s+\w+\s*=\s*|\.\s*CommandText\s*=\s*)(.*?);"
    )
    .unwrap();
}

/// Collect the right-hand side of every assignment statement, in source
/// order. The RHS is raw expression text; literal recovery happens later.
pub fn extract_assignments(sanitized: &str) -> Vec<&str> {
    ASSIGNMENT
        .captures_iter(sanitized)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
