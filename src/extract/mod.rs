mod assignments;
mod literals;

pub use assignments::extract_assignments;
pub use literals::{decode, split_literals, LiteralKind, LiteralPart};
