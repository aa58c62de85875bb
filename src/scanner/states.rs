/// Lexer state for the comment-stripping scan.
///
/// The transition table is total: every state has a defined move for every
/// character, and there is no error state. Unterminated comments or
/// literals simply consume to end of buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    Normal,
    LineComment,
    BlockComment,
    StringLiteral,
    VerbatimStringLiteral,
    CharLiteral,
}
