use lazy_static::lazy_static;
use regex::Regex;

/// Quoting style of a matched literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// `@"..."` (or `$@"..."` / `@$"..."`): only `""` is an escape.
    Verbatim,
    /// `"..."` (or `$"..."`): backslash escapes apply.
    Normal,
}

/// One quoted span, content between the delimiters, before escape decoding.
#[derive(Debug, Clone)]
pub struct LiteralPart {
    pub kind: LiteralKind,
    pub raw: String,
}

lazy_static! {
    /// Matches one string literal of any supported quoting style.
    ///
    /// The verbatim alternative is tried first so `$@"` / `@$"` / `@"`
    /// prefixes never fall through to the normal alternative with a stray
    /// prefix char left behind. Interpolation (`$`) changes nothing about
    /// extraction: `{...}` text inside the literal is kept verbatim.
    /// Group 1: verbatim content (`""` still doubled).
    /// Group 2: normal content (escapes still raw).
    static ref LITERAL: Regex = Regex::new(
        r#"(?s)(?:\$@|@\$|@)"((?:""|[^"])*)"|\$?"([^"\\]*(?:\\.[^"\\]*)*)""#
    )
    .unwrap();
}

/// Scan an expression left to right and collect every string literal in it.
///
/// Non-literal text between matches (operators, identifiers, whitespace,
/// interpolation holes outside quotes) is discarded. Empty input yields an
/// empty sequence.
pub fn split_literals(expr: &str) -> Vec<LiteralPart> {
    let mut parts = Vec::new();
    for caps in LITERAL.captures_iter(expr) {
        if let Some(v) = caps.get(1) {
            parts.push(LiteralPart {
                kind: LiteralKind::Verbatim,
                raw: v.as_str().to_string(),
            });
        } else if let Some(n) = caps.get(2) {
            parts.push(LiteralPart {
                kind: LiteralKind::Normal,
                raw: n.as_str().to_string(),
            });
        }
    }
    parts
}

/// Decode and concatenate literal parts into their runtime string value.
///
/// Verbatim parts collapse doubled quotes and nothing else. Normal parts
/// replace `\n`, `\r`, `\t`, `\"`, `\\` in that fixed order, one pass per
/// sequence, with no recursive re-scan of replaced text.
pub fn decode(parts: &[LiteralPart]) -> String {
    let mut out = String::new();
    for part in parts {
        match part.kind {
            LiteralKind::Verbatim => out.push_str(&part.raw.replace("\"\"", "\"")),
            LiteralKind::Normal => out.push_str(
                &part
                    .raw
                    .replace("\\n", "\n")
                    .replace("\\r", "\r")
                    .replace("\\t", "\t")
                    .replace("\\\"", "\"")
                    .replace("\\\\", "\\"),
            ),
        }
    }
    out
}
