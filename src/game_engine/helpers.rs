//! Small text helpers shared by the quiz and scenario interactions.
//!
//! Options are lettered `A`, `B`, `C`, … so a question can carry at most
//! [`MAX_OPTIONS`] of them.

pub const MAX_OPTIONS: usize = 26;

pub const DIVIDER: &str = "----------------------";

/// Letter for the option at `index` (0 → `A`).
pub fn option_letter(index: usize) -> char {
    debug_assert!(index < MAX_OPTIONS);
    (b'A' + index as u8) as char
}

/// Parse a typed answer into an option index.
///
/// Only the first non-whitespace character counts; it must be a letter
/// (either case) naming one of the `option_count` options.
pub fn parse_answer(input: &str, option_count: usize) -> Option<usize> {
    let c = input.trim_start().chars().next()?;
    if !c.is_ascii_alphabetic() {
        return None;
    }
    let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
    (index < option_count).then_some(index)
}

/// Scenario choices: only the word "good" (any case) counts as positive.
pub fn is_good_choice(input: &str) -> bool {
    input.trim().to_lowercase() == "good"
}

/// Section header such as `--- VybeKwyz Time! ---`.
pub fn banner(title: &str) -> String {
    format!("--- {title} ---")
}
