mod sanitizer;
mod states;

pub use sanitizer::sanitize;
pub use states::LexState;
