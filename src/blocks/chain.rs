use super::depths::DepthTable;
use lazy_static::lazy_static;
use regex::Regex;

/// One arm of a conditional chain. `body_start..=body_end` is a physical
/// line range; it may be empty (`body_end < body_start`) for a zero-line arm.
#[derive(Debug, Clone)]
pub struct BranchBlock {
    pub header: usize,
    pub body_start: usize,
    pub body_end: usize,
    pub depth: i32,
}

/// A maximal run of sibling `if` / `else if` / `else` headers at one
/// nesting depth. `start` is the first header line, `end` the last body
/// line; `blocks` is non-empty and in source order.
#[derive(Debug, Clone)]
pub struct BranchChain {
    pub start: usize,
    pub end: usize,
    pub depth: i32,
    pub blocks: Vec<BranchBlock>,
}

lazy_static! {
    /// A branch header: `if`, `else if` or `else` at the start of the line
    /// after optional whitespace. The trailing `\b` keeps identifiers like
    /// `ifx` from matching.
    static ref HEADER: Regex = Regex::new(r"^\s*(?:if|else\s+if|else)\b").unwrap();
}

/// Whether a line opens a conditional arm.
pub fn is_branch_header(line: &str) -> bool {
    HEADER.is_match(line)
}

/// First non-blank line at or after `start`.
fn next_nonblank(lines: &[&str], start: usize) -> Option<usize> {
    (start..lines.len()).find(|&i| !lines[i].trim().is_empty())
}

/// Resolve the body range owned by the header at line `header`.
///
/// Braced form: the `{` sits on the header line or on the next non-blank
/// line, and the body runs until nesting depth returns to `chain_depth`.
/// Otherwise the branch is a single statement: its body is the next
/// non-blank line alone.
pub fn resolve_block_body(
    lines: &[&str],
    depths: &DepthTable,
    header: usize,
    chain_depth: i32,
) -> (usize, usize) {
    let brace_line = if lines[header].contains('{') {
        Some(header)
    } else {
        match next_nonblank(lines, header + 1) {
            Some(j) if lines[j].trim().starts_with('{') => Some(j),
            _ => None,
        }
    };

    match brace_line {
        Some(b) => {
            let body_start = b + 1;
            let mut body_end = body_start - 1;
            for k in body_start..lines.len() {
                if depths.before[k] == chain_depth {
                    body_end = k.saturating_sub(1);
                    break;
                }
                body_end = k;
            }
            (body_start, body_end)
        }
        None => match next_nonblank(lines, header + 1) {
            Some(s) => (s, s),
            None => (header + 1, header + 1),
        },
    }
}

/// Find the first conditional chain whose arm bodies contain at least one
/// of the given append lines.
///
/// Scans headers in source order; for each, walks the maximal run of
/// sibling headers at that header's depth, resolving each arm's body. The
/// first chain whose body union covers an append line wins; later chains
/// are ignored even if they also contain appends (one decomposition point
/// per accumulator per run).
pub fn locate_chain(
    lines: &[&str],
    depths: &DepthTable,
    append_lines: &[usize],
) -> Option<BranchChain> {
    if append_lines.is_empty() {
        return None;
    }

    for i in 0..lines.len() {
        if !is_branch_header(lines[i]) {
            continue;
        }
        let chain_depth = depths.before[i];

        let mut blocks = Vec::new();
        let mut cursor = i;
        while cursor < lines.len()
            && is_branch_header(lines[cursor])
            && depths.before[cursor] == chain_depth
        {
            let (body_start, body_end) = resolve_block_body(lines, depths, cursor, chain_depth);
            blocks.push(BranchBlock {
                header: cursor,
                body_start,
                body_end,
                depth: chain_depth,
            });
            cursor = body_end + 1;
        }

        let first_body = blocks[0].body_start;
        let last_body = blocks[blocks.len() - 1].body_end;
        if append_lines
            .iter()
            .any(|&ln| ln >= first_body && ln <= last_body)
        {
            return Some(BranchChain {
                start: blocks[0].header,
                end: last_body,
                depth: chain_depth,
                blocks,
            });
        }
    }

    None
}
