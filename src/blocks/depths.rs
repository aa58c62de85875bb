/// Per-line brace nesting depth, before and after each line's own braces.
///
/// Invariants: `after[i] = before[i] + opens(i) - closes(i)` and
/// `before[i + 1] = after[i]`, with `before[0] = 0`.
#[derive(Debug)]
pub struct DepthTable {
    pub before: Vec<i32>,
    pub after: Vec<i32>,
}

/// Annotate every line with its brace nesting depth.
///
/// Braces are counted per character over already-sanitized text, so braces
/// in removed comments cannot appear. Braces inside string literals ARE
/// still counted naively — a known limitation for inputs embedding `{`/`}`
/// in quoted SQL. Unbalanced input drives the depth negative; that is not
/// an error, just an artifact of partial input.
pub fn compute_depths(lines: &[&str]) -> DepthTable {
    let mut depth: i32 = 0;
    let mut before = Vec::with_capacity(lines.len());
    let mut after = Vec::with_capacity(lines.len());

    for line in lines {
        before.push(depth);
        let opens = line.chars().filter(|&c| c == '{').count() as i32;
        let closes = line.chars().filter(|&c| c == '}').count() as i32;
        depth += opens - closes;
        after.push(depth);
    }

    DepthTable { before, after }
}
