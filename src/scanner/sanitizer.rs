use super::states::LexState;

/// Strip `//` and `/* */` comments from C#-style source.
///
/// Line structure is preserved exactly: a line comment keeps its terminator,
/// a block comment keeps every terminator it spans, so line numbers computed
/// over the output match the input. String and char literal contents are
/// copied through untouched, including comment-looking text inside them.
pub fn sanitize(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let n = chars.len();
    let mut out = String::with_capacity(source.len());
    let mut state = LexState::Normal;
    let mut i = 0usize;

    while i < n {
        let ch = chars[i];
        match state {
            LexState::Normal => {
                let next = chars.get(i + 1).copied();
                if ch == '/' && next == Some('/') {
                    state = LexState::LineComment;
                    i += 2;
                } else if ch == '/' && next == Some('*') {
                    state = LexState::BlockComment;
                    i += 2;
                } else if ch == '"' {
                    // A quote preceded by @, $@ or @$ opens a verbatim
                    // literal; the prefix chars were already emitted.
                    let prev1 = if i >= 1 { Some(chars[i - 1]) } else { None };
                    let prev2 = if i >= 2 { Some(chars[i - 2]) } else { None };
                    let verbatim = prev1 == Some('@')
                        || (prev1 == Some('$') && prev2 == Some('@'));
                    out.push(ch);
                    state = if verbatim {
                        LexState::VerbatimStringLiteral
                    } else {
                        LexState::StringLiteral
                    };
                    i += 1;
                } else if ch == '\'' {
                    out.push(ch);
                    state = LexState::CharLiteral;
                    i += 1;
                } else {
                    out.push(ch);
                    i += 1;
                }
            }
            LexState::LineComment => {
                if ch == '\r' {
                    out.push('\r');
                    i += 1;
                    if chars.get(i) == Some(&'\n') {
                        out.push('\n');
                        i += 1;
                    }
                    state = LexState::Normal;
                } else if ch == '\n' {
                    out.push('\n');
                    i += 1;
                    state = LexState::Normal;
                } else {
                    i += 1;
                }
            }
            LexState::BlockComment => {
                if ch == '*' && chars.get(i + 1) == Some(&'/') {
                    i += 2;
                    state = LexState::Normal;
                } else if ch == '\r' {
                    out.push('\r');
                    i += 1;
                    if chars.get(i) == Some(&'\n') {
                        out.push('\n');
                        i += 1;
                    }
                } else if ch == '\n' {
                    out.push('\n');
                    i += 1;
                } else {
                    i += 1;
                }
            }
            LexState::StringLiteral => {
                out.push(ch);
                i += 1;
                if ch == '\\' {
                    // Escaped character: copy through without interpretation.
                    if let Some(&esc) = chars.get(i) {
                        out.push(esc);
                        i += 1;
                    }
                } else if ch == '"' {
                    state = LexState::Normal;
                }
            }
            LexState::CharLiteral => {
                out.push(ch);
                i += 1;
                if ch == '\\' {
                    if let Some(&esc) = chars.get(i) {
                        out.push(esc);
                        i += 1;
                    }
                } else if ch == '\'' {
                    state = LexState::Normal;
                }
            }
            LexState::VerbatimStringLiteral => {
                out.push(ch);
                i += 1;
                if ch == '"' {
                    if chars.get(i) == Some(&'"') {
                        // "" is an escaped quote inside a verbatim literal.
                        out.push('"');
                        i += 1;
                    } else {
                        state = LexState::Normal;
                    }
                }
            }
        }
    }

    out
}
