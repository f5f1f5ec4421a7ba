//! Symbol alphabet for the particle field.

/// Code-like tokens drawn by particles.
pub const SYMBOLS: &[&str] = &[
    "{ }", "< />", "[]", "//", "=>", "()", ";", "*", "&&", "||", "!", "$", "const", "let", "fn",
];
